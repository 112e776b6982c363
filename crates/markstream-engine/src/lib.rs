//! Streaming Markdown rendering for color terminals.
//!
//! Text arrives in chunks of any size (a token stream from a model API, a
//! pipe, a file). [`StreamRenderer`] reassembles lines, parses block and
//! inline structure one line at a time, and writes styled output as soon as
//! each construct is safe to show. The result is the same whichever way the
//! input was split.
//!
//! ```no_run
//! use markstream_engine::{RenderConfig, StreamRenderer, ThemeRegistry};
//!
//! let mut r = StreamRenderer::new(
//!     &RenderConfig::default(),
//!     &ThemeRegistry::builtin(),
//!     std::io::stdout(),
//! )?;
//! r.render("# Hello\n\nSome **bo")?;
//! r.render("ld** text\n")?;
//! r.finalize()?;
//! # Ok::<(), markstream_engine::EngineError>(())
//! ```

pub mod config;
pub mod error;
pub mod parsing;
pub mod render;
pub mod renderer;
pub mod theme;

pub use config::RenderConfig;
pub use error::EngineError;
pub use render::{CodeMode, SyntaxHighlighter, TableLayout};
pub use renderer::StreamRenderer;
pub use theme::{Palette, ThemeRegistry, parse_hex};
