//! instrument-theme crate root: re-exports and module wiring.
//!
//! Styling for the instrument-control UI is split into small modules:
//! - `theme`: theme identities, palettes, the self-healing resolver and egui visuals
//! - `tree`: the host-owned widget tree (arena) and chart-pane structures
//! - `engine`: the recursive tree styling pass
//! - `menu`: menu-strip styling and the derived menu color table
//! - `config`: YAML/JSON configuration
//! - `error`: crate error type

pub mod config;
pub mod engine;
pub mod error;
pub mod menu;
pub mod theme;
pub mod tree;

// Public re-exports for a compact external API
pub use config::{PaletteOverrides, ThemeConfig};
pub use engine::{StyleReport, StylingEngine, DEFAULT_EXCLUSION_TOKEN};
pub use error::ThemeError;
pub use menu::{apply_menu, MenuColors, MenuItem};
pub use theme::{normalize, ActiveTheme, Palette, PaletteField, ThemeContext, ThemeId, ThemeRegistry};
pub use tree::{
    Axis, ChartArea, ChartPane, Checkable, Fill, FillType, Legend, NodeId, NodeKind, Style, TabContainer,
    TabDrawMode, VisualNode, VisualTree,
};
