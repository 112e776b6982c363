use log::debug;

use crate::error::EngineError;

use super::palette::Palette;

/// Palettes by name, in registration order.
///
/// The registry is a plain value handed to the engine at construction;
/// callers that want a process-wide default keep one themselves.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    palettes: Vec<Palette>,
}

impl ThemeRegistry {
    pub const DEFAULT_THEME: &'static str = "github-dark";

    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in palettes.
    pub fn builtin() -> Self {
        Self {
            palettes: vec![
                Palette::github_dark(),
                Palette::monokai(),
                Palette::dracula(),
                Palette::nord(),
                Palette::one_dark(),
                Palette::solarized_dark(),
                Palette::solarized_light(),
            ],
        }
    }

    /// Adds a palette, replacing any existing one with the same name.
    pub fn register(&mut self, palette: Palette) {
        debug!("registering theme {}", palette.name);
        match self.palettes.iter_mut().find(|p| p.name == palette.name) {
            Some(existing) => *existing = palette,
            None => self.palettes.push(palette),
        }
    }

    pub fn get(&self, name: &str) -> Result<&Palette, EngineError> {
        self.palettes
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| EngineError::UnknownTheme {
                name: name.to_string(),
                available: self.names().into_iter().map(str::to_string).collect(),
            })
    }

    pub fn names(&self) -> Vec<&str> {
        self.palettes.iter().map(|p| p.name.as_str()).collect()
    }
}
