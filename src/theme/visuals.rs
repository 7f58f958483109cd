//! egui visuals for a resolved theme.

use egui::{Context, Stroke, Visuals};

use super::id::ThemeId;
use super::registry::ThemeContext;

impl ThemeContext {
    /// egui visuals carrying this context's palette.
    pub fn visuals(&self) -> Visuals {
        let p = self.palette();
        let mut v = match self.theme() {
            ThemeId::Dark => Visuals::dark(),
            ThemeId::Light => Visuals::light(),
        };

        v.panel_fill = p.background;
        v.window_fill = p.background;
        v.extreme_bg_color = p.background;
        v.faint_bg_color = p.background;
        v.override_text_color = Some(p.foreground);
        v.window_stroke = Stroke::new(1.0, p.border);
        v.selection.bg_fill = p.hover;

        v.widgets.noninteractive.bg_fill = p.background;
        v.widgets.noninteractive.weak_bg_fill = p.background;
        v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, p.border);
        v.widgets.noninteractive.fg_stroke.color = p.foreground;

        v.widgets.hovered.bg_fill = p.hover;
        v.widgets.hovered.weak_bg_fill = p.hover;

        v
    }

    /// Install this context's visuals on an egui context.
    pub fn apply(&self, ctx: &Context) {
        ctx.set_visuals(self.visuals());
    }
}

#[cfg(test)]
mod tests {
    use crate::theme::{Palette, ThemeRegistry};

    use super::*;

    #[test]
    fn dark_visuals_carry_dark_palette() {
        let v = ThemeRegistry::builtin().context(ThemeId::Dark).visuals();
        assert!(v.dark_mode);
        assert_eq!(v.panel_fill, Palette::DARK.background);
        assert_eq!(v.override_text_color, Some(Palette::DARK.foreground));
        assert_eq!(v.window_stroke.color, Palette::DARK.border);
        assert_eq!(v.widgets.hovered.bg_fill, Palette::DARK.hover);
    }

    #[test]
    fn light_visuals_start_from_light_base() {
        let v = ThemeRegistry::builtin().context(ThemeId::Light).visuals();
        assert!(!v.dark_mode);
        assert_eq!(v.window_fill, Palette::LIGHT.background);
        assert_eq!(v.widgets.noninteractive.fg_stroke.color, Palette::LIGHT.foreground);
    }
}
