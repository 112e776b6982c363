use thiserror::Error;

/// Errors reported to the caller of the engine.
///
/// Malformed Markdown is never an error; it degrades to looser output.
/// Highlighting and table-layout failures are logged and replaced by plain
/// output, so they never surface here either.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown theme `{name}` (available: {})", available.join(", "))]
    UnknownTheme {
        name: String,
        available: Vec<String>,
    },

    #[error("invalid value for {option}: {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("renderer already finalized")]
    Finalized,

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}
