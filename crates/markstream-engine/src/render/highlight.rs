//! Syntax highlighting collaborator.
//!
//! The scheduler calls [`SyntaxHighlighter::highlight`] once per line in
//! streaming mode and once per block in buffered mode. Failures never stop
//! rendering; the caller falls back to unstyled tokens.

use std::sync::LazyLock;

use syntect::{
    easy::HighlightLines,
    highlighting::{FontStyle, ThemeSet},
    parsing::{SyntaxReference, SyntaxSet},
};
use thiserror::Error;

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Foreground and font flags of a highlighted token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TokenStyle {
    pub fg: Option<(u8, u8, u8)>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeToken {
    pub text: String,
    pub style: TokenStyle,
}

impl CodeToken {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TokenStyle::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("unknown highlighting style `{0}`")]
    UnknownStyle(String),

    #[error("highlighting failed: {0}")]
    Syntect(#[from] syntect::Error),
}

pub trait SyntaxHighlighter {
    /// Highlights `lines` as one block of `lang` code using the named
    /// style, returning one token list per input line.
    fn highlight(
        &self,
        lang: &str,
        lines: &[String],
        style: &str,
    ) -> Result<Vec<Vec<CodeToken>>, HighlightError>;
}

/// Highlighting with syntect's bundled syntaxes and themes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
    /// Names of the bundled highlighting styles.
    pub fn styles() -> Vec<&'static str> {
        THEME_SET.themes.keys().map(String::as_str).collect()
    }
}

/// Some fence tags name a language by a word syntect does not know.
fn normalize_lang(lang: &str) -> String {
    let lower = lang.trim().to_ascii_lowercase();
    match lower.as_str() {
        "shell" | "sh" | "zsh" | "console" => "bash".to_string(),
        "py" | "python3" => "python".to_string(),
        "rs" => "rust".to_string(),
        "js" | "jsx" | "ts" | "typescript" | "tsx" => "javascript".to_string(),
        "yml" => "yaml".to_string(),
        "c++" => "cpp".to_string(),
        _ => lower,
    }
}

fn find_syntax(lang: &str) -> &'static SyntaxReference {
    let lang = normalize_lang(lang);
    if lang.is_empty() {
        return SYNTAX_SET.find_syntax_plain_text();
    }
    SYNTAX_SET
        .find_syntax_by_token(&lang)
        .or_else(|| SYNTAX_SET.find_syntax_by_extension(&lang))
        .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text())
}

impl SyntaxHighlighter for SyntectHighlighter {
    fn highlight(
        &self,
        lang: &str,
        lines: &[String],
        style: &str,
    ) -> Result<Vec<Vec<CodeToken>>, HighlightError> {
        let theme = THEME_SET
            .themes
            .get(style)
            .ok_or_else(|| HighlightError::UnknownStyle(style.to_string()))?;
        let mut highlighter = HighlightLines::new(find_syntax(lang), theme);

        lines
            .iter()
            .map(|line| -> Result<Vec<CodeToken>, HighlightError> {
                // The newline-aware syntax set expects line endings.
                let with_nl = format!("{line}\n");
                let ranges = highlighter.highlight_line(&with_nl, &SYNTAX_SET)?;
                Ok(ranges
                    .into_iter()
                    .filter_map(|(s, text)| {
                        let text = text.trim_end_matches('\n');
                        (!text.is_empty()).then(|| CodeToken {
                            text: text.to_string(),
                            style: TokenStyle {
                                fg: Some((s.foreground.r, s.foreground.g, s.foreground.b)),
                                bold: s.font_style.contains(FontStyle::BOLD),
                                italic: s.font_style.contains(FontStyle::ITALIC),
                                underline: s.font_style.contains(FontStyle::UNDERLINE),
                            },
                        })
                    })
                    .collect())
            })
            .collect()
    }
}

/// Returns every line as a single unstyled token.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainHighlighter;

impl SyntaxHighlighter for PlainHighlighter {
    fn highlight(
        &self,
        _lang: &str,
        lines: &[String],
        _style: &str,
    ) -> Result<Vec<Vec<CodeToken>>, HighlightError> {
        Ok(lines
            .iter()
            .map(|l| {
                if l.is_empty() {
                    vec![]
                } else {
                    vec![CodeToken::plain(l.as_str())]
                }
            })
            .collect())
    }
}
