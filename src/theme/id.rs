use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Canonical theme identity.
///
/// Names are matched exactly (`"Dark"`, `"Light"`), both when parsing and in
/// serialized configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThemeId {
    /// Dark grey background with light text.
    #[default]
    Dark,
    /// Light grey background with black text.
    Light,
}

impl ThemeId {
    /// All identities (useful for menu construction).
    pub fn all() -> &'static [ThemeId] {
        &[ThemeId::Dark, ThemeId::Light]
    }

    /// Name as stored in configuration.
    pub fn name(self) -> &'static str {
        match self {
            ThemeId::Dark => "Dark",
            ThemeId::Light => "Light",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeId::all()
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| ThemeError::UnknownTheme(s.to_string()))
    }
}

/// Map an arbitrary theme name onto a canonical identity, falling back to `default`.
pub fn normalize(name: &str, default: ThemeId) -> ThemeId {
    name.parse().unwrap_or(default)
}
