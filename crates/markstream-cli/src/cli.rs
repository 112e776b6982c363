use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "markstream")]
#[command(author, version)]
#[command(about = "Render Markdown in the terminal as it streams in")]
#[command(after_help = "\
EXAMPLES:

    # Render a file
    markstream README.md

    # Render a model's streamed answer as it arrives
    llm 'explain lifetimes' | markstream

CONFIGURATION:

markstream looks for a configuration file in this order:
  1. Explicit --config path
  2. ./.markstream.toml
  3. ~/.markstream/config.toml
  4. $XDG_CONFIG_HOME/markstream/config.toml (~/.config when unset)

Command-line flags override the configuration file.")]
pub struct Cli {
    /// Markdown file to render; stdin when absent or `-`
    pub file: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, env = "MARKSTREAM_THEME")]
    pub theme: Option<String>,

    /// Hide line numbers in code blocks
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Paint a background behind code blocks
    #[arg(long)]
    pub code_background: bool,

    /// Output width in columns (default: terminal width)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Hold each code block until it is complete, for better highlighting
    #[arg(long)]
    pub no_stream_code: bool,

    /// Emit colors even when stdout is not a terminal
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Never emit colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(short, long, env = "MARKSTREAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    pub init_config: bool,

    /// List available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}
