use instrument_theme::*;

#[test]
fn unknown_theme_heals_to_default_and_returns_default_palette() {
    let reg = ThemeRegistry::builtin();
    let mut active = ActiveTheme::new("Solarized");

    let palette = reg.resolve(&mut active);
    assert_eq!(palette, Palette::DARK);
    assert_eq!(active.name(), ThemeId::Dark.name());
}

#[test]
fn unknown_theme_heals_to_configured_default() {
    let reg = ThemeRegistry::builtin().with_default_theme(ThemeId::Light);
    for name in ["Solarized", "", "dark-ish", "0"] {
        let mut active = ActiveTheme::new(name);
        assert_eq!(reg.resolve_background(&mut active), Palette::LIGHT.background);
        assert_eq!(active.name(), "Light");
    }
}

#[test]
fn border_and_hover_fallbacks_resolve_their_own_fields() {
    let reg = ThemeRegistry::builtin();

    let mut active = ActiveTheme::new("Solarized");
    assert_eq!(reg.resolve_border(&mut active), Palette::DARK.border);
    assert_ne!(Palette::DARK.border, Palette::DARK.hover);

    let mut active = ActiveTheme::new("Solarized");
    assert_eq!(reg.resolve_hover(&mut active), Palette::DARK.hover);

    let mut active = ActiveTheme::new("Solarized");
    assert_eq!(reg.resolve_foreground(&mut active), Palette::DARK.foreground);
}

#[test]
fn light_theme_resolves_light_palette() {
    let reg = ThemeRegistry::builtin();
    let mut active = ActiveTheme::new("Light");
    let ctx = active.context(&reg);
    assert_eq!(ctx.theme(), ThemeId::Light);
    assert_eq!(ctx.background(), Palette::LIGHT.background);
    assert_eq!(ctx.foreground(), Palette::LIGHT.foreground);
    assert_eq!(ctx.border(), Palette::LIGHT.border);
    assert_eq!(ctx.hover(), Palette::LIGHT.hover);
}

#[test]
fn switching_theme_changes_resolution() {
    let reg = ThemeRegistry::builtin();
    let mut active = ActiveTheme::default();
    assert_eq!(active.resolve(&reg), ThemeId::Dark);
    active.set("Light");
    assert_eq!(active.resolve(&reg), ThemeId::Light);
}

#[test]
fn normalize_is_pure() {
    assert_eq!(normalize("Solarized", ThemeId::Dark), ThemeId::Dark);
    assert_eq!(normalize("Light", ThemeId::Dark), ThemeId::Light);
    assert_eq!(normalize("light", ThemeId::Dark), ThemeId::Dark);
}

#[test]
fn padded_name_is_unrecognized_and_rewritten_to_default() {
    let reg = ThemeRegistry::builtin();
    let mut active = ActiveTheme::new(" light ");

    let palette = reg.resolve(&mut active);
    assert_eq!(palette, Palette::DARK);
    assert_ne!(palette, Palette::LIGHT);
    assert_eq!(active.name(), "Dark");
    assert_eq!(active.resolve(&reg), ThemeId::Dark);
}
