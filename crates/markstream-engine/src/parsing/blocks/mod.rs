//! # Block Parsing
//!
//! Two-phase, line-at-a-time block parsing with an explicit container stack.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` holding local facts (indentation, blockquote depth, blank
//!    status)
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` keeps the
//!    container stack and the open leaf, and turns every completed line into
//!    zero or more `BlockEvent`s
//!
//! ## Modules
//!
//! - **`types`**: `BlockEvent`, `BlockEventKind`, `ContainerFrame`
//! - **`kinds`**: block-specific recognisers with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`containers`**: `ContainerPath` for nested quotes and list items
//! - **`open`**: `try_open` dispatch in precedence order
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Nesting depth is unbounded (lists in blockquotes, lists in lists)
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - A line is never held back longer than one line of lookahead

pub mod builder;
pub mod classify;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{BlockEvent, BlockEventKind, ContainerFrame};
