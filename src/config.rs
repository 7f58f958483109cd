//! Theme configuration loaded from YAML or JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::{StylingEngine, DEFAULT_EXCLUSION_TOKEN};
use crate::error::ThemeError;
use crate::theme::{ActiveTheme, Palette, PaletteSerde, ThemeId, ThemeRegistry};

/// Optional replacements for the built-in palettes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub dark: Option<PaletteSerde>,
    pub light: Option<PaletteSerde>,
}

/// Theme settings of the application.
///
/// `theme` is kept as raw text: a stale or hand-edited value is normalized when
/// the first styling pass reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub theme: String,
    pub default_theme: ThemeId,
    pub exclusion_token: String,
    pub palettes: PaletteOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            theme: ThemeId::default().name().to_string(),
            default_theme: ThemeId::default(),
            exclusion_token: DEFAULT_EXCLUSION_TOKEN.to_string(),
            palettes: PaletteOverrides::default(),
        }
    }
}

enum Format {
    Yaml,
    Json,
}

fn format_for(path: &Path) -> Result<Format, ThemeError> {
    match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("yaml" | "yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        _ => Err(ThemeError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl ThemeConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ThemeError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ThemeError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json_string(&self) -> Result<String, ThemeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self, ThemeError> {
        let format = format_for(path)?;
        let txt = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = match format {
            Format::Yaml => Self::from_yaml_str(&txt)?,
            Format::Json => Self::from_json_str(&txt)?,
        };
        info!(path = %path.display(), theme = %cfg.theme, "loaded theme config");
        Ok(cfg)
    }

    /// Save to a `.yaml`, `.yml` or `.json` file.
    pub fn save(&self, path: &Path) -> Result<(), ThemeError> {
        let txt = match format_for(path)? {
            Format::Yaml => self.to_yaml_string()?,
            Format::Json => self.to_json_string()?,
        };
        std::fs::write(path, txt).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "saved theme config");
        Ok(())
    }

    /// Registry with overrides applied. Fails on malformed colors.
    pub fn registry(&self) -> Result<ThemeRegistry, ThemeError> {
        let mut reg = ThemeRegistry::builtin().with_default_theme(self.default_theme);
        if let Some(p) = &self.palettes.dark {
            reg = reg.with_palette(ThemeId::Dark, Palette::try_from(p)?);
        }
        if let Some(p) = &self.palettes.light {
            reg = reg.with_palette(ThemeId::Light, Palette::try_from(p)?);
        }
        Ok(reg)
    }

    pub fn active_theme(&self) -> ActiveTheme {
        ActiveTheme::new(self.theme.clone())
    }

    pub fn engine(&self) -> StylingEngine {
        StylingEngine::with_exclusion_token(self.exclusion_token.clone())
    }
}
