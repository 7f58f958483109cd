//! Menu strip styling.
//!
//! Menu items live outside the visual tree, so they get their own walk. Every
//! item is themed; there is no opt-out marker for menus.

use egui::Color32;
use tracing::debug;

use crate::theme::ThemeContext;
use crate::tree::Style;

/// An entry of a menu strip or drop-down.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MenuItem {
    pub text: String,
    pub style: Style,
    pub checked: bool,
    /// Drop-down entries.
    pub items: Vec<MenuItem>,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_items(mut self, items: Vec<MenuItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Depth-first search for an item by its text.
    pub fn find_mut(&mut self, text: &str) -> Option<&mut MenuItem> {
        if self.text == text {
            return Some(self);
        }
        self.items.iter_mut().find_map(|item| item.find_mut(text))
    }
}

/// Style every item and sub-item; returns how many items were styled.
pub fn apply_menu(items: &mut [MenuItem], ctx: &ThemeContext) -> usize {
    let style = Style {
        background: ctx.background(),
        foreground: ctx.foreground(),
    };

    let mut styled = 0;
    let mut stack: Vec<&mut MenuItem> = items.iter_mut().rev().collect();
    while let Some(item) = stack.pop() {
        let MenuItem { style: s, items: sub, .. } = item;
        *s = style;
        styled += 1;
        stack.extend(sub.iter_mut().rev());
    }

    debug!(theme = %ctx.theme(), styled, "applied theme to menu");
    styled
}

/// Colors a menu renderer asks for while drawing drop-downs and the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuColors {
    pub dropdown_background: Color32,
    pub image_margin_begin: Color32,
    pub image_margin_middle: Color32,
    pub image_margin_end: Color32,
    pub menu_border: Color32,
    pub item_border: Color32,
    pub item_selected: Color32,
    pub strip_gradient_begin: Color32,
    pub strip_gradient_end: Color32,
    pub selected_gradient_begin: Color32,
    pub selected_gradient_end: Color32,
    pub pressed_gradient_begin: Color32,
    pub pressed_gradient_middle: Color32,
    pub pressed_gradient_end: Color32,
}

impl MenuColors {
    pub fn from_context(ctx: &ThemeContext) -> Self {
        let bg = ctx.background();
        let hover = ctx.hover();
        Self {
            dropdown_background: bg,
            image_margin_begin: bg,
            image_margin_middle: bg,
            image_margin_end: bg,
            menu_border: Color32::BLACK,
            item_border: Color32::BLACK,
            item_selected: hover,
            strip_gradient_begin: hover,
            strip_gradient_end: hover,
            selected_gradient_begin: hover,
            selected_gradient_end: hover,
            pressed_gradient_begin: hover,
            pressed_gradient_middle: hover,
            pressed_gradient_end: hover,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Palette, ThemeId, ThemeRegistry};

    #[test]
    fn empty_collection_styles_nothing() {
        let ctx = ThemeRegistry::builtin().context(ThemeId::Light);
        assert_eq!(apply_menu(&mut [], &ctx), 0);
    }

    #[test]
    fn color_table_uses_background_and_hover() {
        let ctx = ThemeRegistry::builtin().context(ThemeId::Dark);
        let colors = MenuColors::from_context(&ctx);
        assert_eq!(colors.dropdown_background, Palette::DARK.background);
        assert_eq!(colors.image_margin_end, Palette::DARK.background);
        assert_eq!(colors.item_selected, Palette::DARK.hover);
        assert_eq!(colors.pressed_gradient_middle, Palette::DARK.hover);
        assert_eq!(colors.menu_border, Color32::BLACK);
    }

    #[test]
    fn find_mut_reaches_nested_items() {
        let mut menu = MenuItem::new("View").with_items(vec![
            MenuItem::new("Theme").with_items(vec![MenuItem::new("Dark"), MenuItem::new("Light")]),
        ]);
        let light = menu.find_mut("Light").unwrap();
        light.checked = true;
        assert!(menu.items[0].items[1].checked);
        assert!(menu.find_mut("Missing").is_none());
    }
}
