use crossterm::style::Color;

use crate::{error::EngineError, render::CodeMode, theme::ThemeRegistry};

/// Narrowest terminal the renderer accepts.
pub const MIN_WIDTH: usize = 10;

/// Immutable settings for one renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Palette name looked up in the [`ThemeRegistry`].
    pub theme: String,
    pub code_background: bool,
    pub line_numbers: bool,
    /// Emit colors and attributes. Off means plain text.
    pub color: bool,
    pub code_mode: CodeMode,
    /// Terminal width in columns.
    pub width: usize,
    /// Replaces the palette's inline code color.
    pub inline_code_color: Option<Color>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: ThemeRegistry::DEFAULT_THEME.to_string(),
            code_background: false,
            line_numbers: true,
            color: true,
            code_mode: CodeMode::Streaming,
            width: 80,
            inline_code_color: None,
        }
    }
}

impl RenderConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width < MIN_WIDTH {
            return Err(EngineError::InvalidOption {
                option: "width".into(),
                reason: format!("must be at least {MIN_WIDTH}, got {}", self.width),
            });
        }
        if self.theme.trim().is_empty() {
            return Err(EngineError::InvalidOption {
                option: "theme".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}
