//! Error type shared by color parsing and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the configuration layer.
///
/// The styling passes themselves never fail; unknown theme names are
/// normalized rather than reported.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("Unknown theme '{0}'")]
    UnknownTheme(String),
    #[error("Invalid color '{0}': expected #rrggbb or #rrggbbaa")]
    InvalidColor(String),
    #[error("Failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported config format: {0:?} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),
}
