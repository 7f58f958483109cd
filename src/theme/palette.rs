//! Palette definitions and hex color helpers.

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// The four colors a theme assigns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Color32,
    pub foreground: Color32,
    pub border: Color32,
    pub hover: Color32,
}

/// Selects one field of a [`Palette`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaletteField {
    Background,
    Foreground,
    Border,
    Hover,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(0x1e, 0x1e, 0x1e),
        foreground: Color32::from_rgb(0xd4, 0xd4, 0xb1),
        border: Color32::from_rgb(0xe0, 0xe0, 0xe0),
        hover: Color32::from_rgb(0x09, 0x47, 0x71),
    };

    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(0xf0, 0xf0, 0xf0),
        foreground: Color32::from_rgb(0x00, 0x00, 0x00),
        border: Color32::from_rgb(0x10, 0x10, 0x10),
        hover: Color32::from_rgb(0xe5, 0xe5, 0xe5),
    };

    pub fn get(&self, field: PaletteField) -> Color32 {
        match field {
            PaletteField::Background => self.background,
            PaletteField::Foreground => self.foreground,
            PaletteField::Border => self.border,
            PaletteField::Hover => self.hover,
        }
    }
}

/// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional, alpha unmultiplied).
pub fn parse_hex_color(s: &str) -> Result<Color32, ThemeError> {
    let invalid = || ThemeError::InvalidColor(s.to_string());
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }
    let mut bytes = [0xffu8; 4];
    for (i, chunk) in hex.as_bytes().chunks(2).enumerate() {
        let pair = std::str::from_utf8(chunk).map_err(|_| invalid())?;
        bytes[i] = u8::from_str_radix(pair, 16).map_err(|_| invalid())?;
    }
    Ok(Color32::from_rgba_unmultiplied(bytes[0], bytes[1], bytes[2], bytes[3]))
}

/// Format a color as `#rrggbb`, or `#rrggbbaa` when not fully opaque.
pub fn to_hex_color(c: Color32) -> String {
    let [r, g, b, a] = c.to_srgba_unmultiplied();
    if a == u8::MAX {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}

// ---------- Serializable mirror type ----------

/// Serializable version of [`Palette`] with hex color strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSerde {
    pub background: String,
    pub foreground: String,
    pub border: String,
    pub hover: String,
}

impl From<&Palette> for PaletteSerde {
    fn from(p: &Palette) -> Self {
        Self {
            background: to_hex_color(p.background),
            foreground: to_hex_color(p.foreground),
            border: to_hex_color(p.border),
            hover: to_hex_color(p.hover),
        }
    }
}

impl TryFrom<&PaletteSerde> for Palette {
    type Error = ThemeError;

    fn try_from(p: &PaletteSerde) -> Result<Self, Self::Error> {
        Ok(Palette {
            background: parse_hex_color(&p.background)?,
            foreground: parse_hex_color(&p.foreground)?,
            border: parse_hex_color(&p.border)?,
            hover: parse_hex_color(&p.hover)?,
        })
    }
}
