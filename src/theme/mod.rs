//! Theme identities, palettes and resolution.
//!
//! A theme name comes from configuration or a menu command and is stored in an
//! [`ActiveTheme`]. The [`ThemeRegistry`] turns it into a [`ThemeContext`], the
//! value every styling pass receives.

mod id;
mod palette;
mod registry;
mod visuals;

pub use id::{normalize, ThemeId};
pub use palette::{parse_hex_color, to_hex_color, Palette, PaletteField, PaletteSerde};
pub use registry::{ActiveTheme, ThemeContext, ThemeRegistry};
