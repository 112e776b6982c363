use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const APP_NAME: &str = "markstream";
pub const LOCAL_CONFIG_FILE: &str = ".markstream.toml";
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_CONFIG: &str = r##"# markstream configuration
#
# Command-line flags take precedence over values in this file.

[rendering]
theme = "github-dark"
code_background = false
line_numbers = true
# inline_code_color = "#ff7b72"

[output]
# width = 80  # Uncomment to set a fixed width instead of the terminal's
force_color = false

[features]
stream_code = true
"##;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings read from a TOML file. Every field is optional; callers fall
/// back to their own defaults for anything left unset.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rendering: RenderingSection,
    pub output: OutputSection,
    pub features: FeaturesSection,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_numbers: Option<bool>,
    /// `#rrggbb`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_code_color: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_color: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturesSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_code: Option<bool>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }
        Self::read(config_path).map(Some)
    }

    fn read(config_path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
            config_path: config_path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` if given, otherwise the first file found by
    /// [`Config::discover`]. `Ok(None)` means nothing was discovered; an
    /// explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Option<Self>, ConfigError> {
        match explicit {
            Some(path) => {
                let path = Self::expand_path(path).unwrap_or_else(|| path.to_path_buf());
                Self::read(&path).map(Some)
            }
            None => match Self::discover() {
                Some(path) => Self::load_from_path(&path),
                None => Ok(None),
            },
        }
    }

    /// First existing config file in the standard locations.
    pub fn discover() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        let home = PathBuf::from(shellexpand::tilde("~").as_ref());
        let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
        Self::candidates(&cwd, &home, xdg.as_deref())
            .into_iter()
            .find(|p| p.is_file())
    }

    /// Search order: `./.markstream.toml`, `~/.markstream/config.toml`,
    /// then `$XDG_CONFIG_HOME/markstream/config.toml` (`~/.config` when unset).
    pub fn candidates(cwd: &Path, home: &Path, xdg_config_home: Option<&Path>) -> Vec<PathBuf> {
        let xdg = xdg_config_home
            .map(Path::to_path_buf)
            .unwrap_or_else(|| home.join(".config"));
        vec![
            cwd.join(LOCAL_CONFIG_FILE),
            home.join(format!(".{APP_NAME}")).join(CONFIG_FILE),
            xdg.join(APP_NAME).join(CONFIG_FILE),
        ]
    }

    /// Where `--init-config` writes when no path is given.
    pub fn default_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.markstream");
        PathBuf::from(config_dir.as_ref()).join(CONFIG_FILE)
    }

    /// Writes the commented default config file, creating parent
    /// directories as needed.
    pub fn write_default<P: AsRef<Path>>(config_path: P) -> anyhow::Result<PathBuf> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, DEFAULT_CONFIG)?;
        Ok(config_path.to_path_buf())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        let path_str = path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".markstream/config.toml"));
    }

    #[test]
    fn test_candidates_order() {
        let candidates = Config::candidates(Path::new("/work"), Path::new("/home/u"), None);
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/work/.markstream.toml"),
                PathBuf::from("/home/u/.markstream/config.toml"),
                PathBuf::from("/home/u/.config/markstream/config.toml"),
            ]
        );
    }

    #[test]
    fn test_candidates_respect_xdg() {
        let candidates =
            Config::candidates(Path::new("/work"), Path::new("/home/u"), Some(Path::new("/x")));
        assert_eq!(candidates[2], PathBuf::from("/x/markstream/config.toml"));
    }

    #[test]
    fn test_sections_parse() {
        let config: Config = toml::from_str(
            r##"
[rendering]
theme = "nord"
inline_code_color = "#112233"

[output]
width = 100

[features]
stream_code = false
"##,
        )
        .unwrap();

        assert_eq!(config.rendering.theme.as_deref(), Some("nord"));
        assert_eq!(config.rendering.inline_code_color.as_deref(), Some("#112233"));
        assert_eq!(config.rendering.line_numbers, None);
        assert_eq!(config.output.width, Some(100));
        assert_eq!(config.output.force_color, None);
        assert_eq!(config.features.stream_code, Some(false));
    }

    #[test]
    fn test_empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("MARKSTREAM_TEST_DIR", "/test/env/path");
        }

        let path = PathBuf::from("$MARKSTREAM_TEST_DIR/config.toml");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/config.toml")));

        unsafe {
            env::remove_var("MARKSTREAM_TEST_DIR");
        }
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        assert!(Config::load_from_path(&missing).unwrap().is_none());
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nonexistent.toml");

        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
        assert!(err.to_string().contains("nonexistent.toml"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("bad.toml");
        std::fs::write(&config_file, "[output]\nwidth = \"wide\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn test_write_default_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");

        Config::write_default(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.rendering.theme.as_deref(), Some("github-dark"));
        assert_eq!(loaded.rendering.line_numbers, Some(true));
        assert_eq!(loaded.output.width, None);
        assert_eq!(loaded.features.stream_code, Some(true));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let config = Config {
            output: OutputSection {
                width: Some(72),
                force_color: Some(true),
            },
            ..Config::default()
        };

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded, config);
    }
}
