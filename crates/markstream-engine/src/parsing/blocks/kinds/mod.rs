//! Block kinds with owned delimiters and recognisers.
//!
//! Each kind keeps its syntax knowledge next to its tests; `open` only
//! decides precedence between them.

pub mod block_quote;
pub mod code_fence;
pub mod definition;
pub mod footnote;
pub mod heading;
pub mod list_item;
pub mod progress;
pub mod table;
pub mod thematic_break;

pub use block_quote::{BlockQuote, CalloutKind};
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use definition::Definition;
pub use footnote::FootnoteDef;
pub use heading::Heading;
pub use list_item::{ListItem, ListItemOpen, ListMarker};
pub use progress::{ProgressBand, ProgressItem};
pub use table::{Alignment, TableRow};
pub use thematic_break::ThematicBreak;
