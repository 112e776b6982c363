//! Themes: palettes, the registry that names them, and the mapper that
//! turns render events into display attributes.

pub mod mapper;
pub mod palette;
pub mod registry;

pub use mapper::{Attributes, attributes, with_inline};
pub use palette::{Palette, parse_hex};
pub use registry::ThemeRegistry;
