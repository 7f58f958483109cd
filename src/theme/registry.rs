//! Palette registry, the active theme setting and the resolved context.

use egui::Color32;

use super::id::ThemeId;
use super::palette::{Palette, PaletteField};

/// Palettes for each theme identity plus the fallback identity.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeRegistry {
    dark: Palette,
    light: Palette,
    default_theme: ThemeId,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ThemeRegistry {
    /// Built-in dark and light palettes, falling back to dark.
    pub fn builtin() -> Self {
        Self {
            dark: Palette::DARK,
            light: Palette::LIGHT,
            default_theme: ThemeId::Dark,
        }
    }

    /// Replace the palette used for `id`.
    pub fn with_palette(mut self, id: ThemeId, palette: Palette) -> Self {
        match id {
            ThemeId::Dark => self.dark = palette,
            ThemeId::Light => self.light = palette,
        }
        self
    }

    /// Identity an unrecognized active name is healed to.
    pub fn with_default_theme(mut self, id: ThemeId) -> Self {
        self.default_theme = id;
        self
    }

    pub fn default_theme(&self) -> ThemeId {
        self.default_theme
    }

    pub fn palette(&self, id: ThemeId) -> &Palette {
        match id {
            ThemeId::Dark => &self.dark,
            ThemeId::Light => &self.light,
        }
    }

    /// Resolved context for a canonical identity.
    pub fn context(&self, id: ThemeId) -> ThemeContext {
        ThemeContext {
            theme: id,
            palette: *self.palette(id),
        }
    }

    /// Resolve one palette field for the active theme.
    ///
    /// An unrecognized active name is reset to the default identity and the
    /// same field is resolved again.
    pub fn resolve_field(&self, active: &mut ActiveTheme, field: PaletteField) -> Color32 {
        loop {
            match active.name.parse::<ThemeId>() {
                Ok(id) => return self.palette(id).get(field),
                Err(_) => active.reset_to(self.default_theme),
            }
        }
    }

    pub fn resolve_background(&self, active: &mut ActiveTheme) -> Color32 {
        self.resolve_field(active, PaletteField::Background)
    }

    pub fn resolve_foreground(&self, active: &mut ActiveTheme) -> Color32 {
        self.resolve_field(active, PaletteField::Foreground)
    }

    pub fn resolve_border(&self, active: &mut ActiveTheme) -> Color32 {
        self.resolve_field(active, PaletteField::Border)
    }

    pub fn resolve_hover(&self, active: &mut ActiveTheme) -> Color32 {
        self.resolve_field(active, PaletteField::Hover)
    }

    /// Resolve the full palette for the active theme.
    pub fn resolve(&self, active: &mut ActiveTheme) -> Palette {
        *self.palette(active.resolve(self))
    }
}

/// The configured theme name, possibly not (yet) a canonical identity.
///
/// Reading through [`ActiveTheme::resolve`] or the registry's resolvers heals
/// an unknown name to the registry default in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveTheme {
    name: String,
}

impl Default for ActiveTheme {
    fn default() -> Self {
        Self::from(ThemeId::default())
    }
}

impl From<ThemeId> for ActiveTheme {
    fn from(id: ThemeId) -> Self {
        Self {
            name: id.name().to_string(),
        }
    }
}

impl ActiveTheme {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Canonical identity, normalizing the stored name when unrecognized.
    pub fn resolve(&mut self, registry: &ThemeRegistry) -> ThemeId {
        match self.name.parse::<ThemeId>() {
            Ok(id) => id,
            Err(_) => {
                self.reset_to(registry.default_theme());
                registry.default_theme()
            }
        }
    }

    /// Normalize and build the context for a styling pass.
    pub fn context(&mut self, registry: &ThemeRegistry) -> ThemeContext {
        let id = self.resolve(registry);
        registry.context(id)
    }

    fn reset_to(&mut self, id: ThemeId) {
        self.name = id.name().to_string();
    }
}

/// Colors resolved for one styling pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeContext {
    theme: ThemeId,
    palette: Palette,
}

impl ThemeContext {
    pub fn new(theme: ThemeId, palette: Palette) -> Self {
        Self { theme, palette }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn background(&self) -> Color32 {
        self.palette.background
    }

    pub fn foreground(&self) -> Color32 {
        self.palette.foreground
    }

    pub fn border(&self) -> Color32 {
        self.palette.border
    }

    pub fn hover(&self) -> Color32 {
        self.palette.hover
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_without_rewriting() {
        let reg = ThemeRegistry::builtin();
        let mut active = ActiveTheme::new("Light");
        assert_eq!(reg.resolve_background(&mut active), Palette::LIGHT.background);
        assert_eq!(active.name(), "Light");
    }

    #[test]
    fn near_miss_spellings_heal_to_default() {
        let reg = ThemeRegistry::builtin();
        for name in [" light ", "light", "LIGHT"] {
            let mut active = ActiveTheme::new(name);
            assert_eq!(reg.resolve(&mut active), Palette::DARK, "{name:?}");
            assert_eq!(active.name(), "Dark", "{name:?}");

            let mut active = ActiveTheme::new(name);
            assert_eq!(reg.resolve_hover(&mut active), Palette::DARK.hover, "{name:?}");
            assert_eq!(active.name(), "Dark", "{name:?}");
        }
    }

    #[test]
    fn each_field_falls_back_to_its_own_value() {
        let reg = ThemeRegistry::builtin().with_default_theme(ThemeId::Light);
        for field in [
            PaletteField::Background,
            PaletteField::Foreground,
            PaletteField::Border,
            PaletteField::Hover,
        ] {
            let mut active = ActiveTheme::new("bogus");
            assert_eq!(reg.resolve_field(&mut active, field), Palette::LIGHT.get(field));
            assert_eq!(active.name(), "Light");
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        let reg = ThemeRegistry::builtin();
        let mut active = ActiveTheme::new("??");
        let first = active.resolve(&reg);
        let second = active.resolve(&reg);
        assert_eq!(first, ThemeId::Dark);
        assert_eq!(first, second);
        assert_eq!(active, ActiveTheme::from(ThemeId::Dark));
    }

    #[test]
    fn palette_override_is_used_by_context() {
        let custom = Palette {
            background: Color32::RED,
            ..Palette::DARK
        };
        let reg = ThemeRegistry::builtin().with_palette(ThemeId::Dark, custom);
        let ctx = reg.context(ThemeId::Dark);
        assert_eq!(ctx.background(), Color32::RED);
        assert_eq!(ctx.foreground(), Palette::DARK.foreground);
        assert_eq!(reg.palette(ThemeId::Light), &Palette::LIGHT);
    }
}
