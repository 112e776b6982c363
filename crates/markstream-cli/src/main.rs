use anyhow::{Context, Result, bail};
use clap::Parser;
use markstream_config::Config;
use markstream_engine::{CodeMode, RenderConfig, StreamRenderer, ThemeRegistry, parse_hex};
use std::{
    fs::File,
    io::{self, IsTerminal, Read, Write},
    path::Path,
    process,
};

mod cli;

use cli::Cli;

const READ_SIZE: usize = 4096;
const FALLBACK_WIDTH: usize = 80;

/// What the environment says about stdout.
#[derive(Debug, Clone, Copy)]
struct Terminal {
    is_tty: bool,
    width: Option<usize>,
    no_color_env: bool,
}

impl Terminal {
    fn detect() -> Self {
        let is_tty = io::stdout().is_terminal();
        let width = crossterm::terminal::size()
            .ok()
            .map(|(cols, _)| usize::from(cols))
            .filter(|w| *w > 0);
        Self {
            is_tty,
            width,
            no_color_env: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

/// Flags win over the config file, which wins over built-in defaults.
fn render_config(cli: &Cli, file: &Config, term: Terminal) -> Result<RenderConfig> {
    let defaults = RenderConfig::default();

    let color = if cli.no_color {
        false
    } else if cli.force_color || file.output.force_color.unwrap_or(false) {
        true
    } else {
        term.is_tty && !term.no_color_env
    };

    let inline_code_color = match &file.rendering.inline_code_color {
        Some(hex) => Some(
            parse_hex(hex).with_context(|| format!("invalid inline_code_color `{hex}`"))?,
        ),
        None => None,
    };

    let stream_code = !cli.no_stream_code && file.features.stream_code.unwrap_or(true);

    Ok(RenderConfig {
        theme: cli
            .theme
            .clone()
            .or_else(|| file.rendering.theme.clone())
            .unwrap_or(defaults.theme),
        code_background: cli.code_background
            || file.rendering.code_background.unwrap_or(defaults.code_background),
        line_numbers: !cli.no_line_numbers
            && file.rendering.line_numbers.unwrap_or(defaults.line_numbers),
        color,
        code_mode: if stream_code {
            CodeMode::Streaming
        } else {
            CodeMode::Buffered
        },
        width: cli
            .width
            .or(file.output.width)
            .or(term.width)
            .unwrap_or(FALLBACK_WIDTH),
        inline_code_color,
    })
}

fn open_input(file: Option<&Path>) -> Result<Box<dyn Read>> {
    match file {
        None => Ok(Box::new(io::stdin())),
        Some(p) if p == Path::new("-") => Ok(Box::new(io::stdin())),
        Some(p) => {
            let f = File::open(p).with_context(|| format!("cannot open {}", p.display()))?;
            Ok(Box::new(f))
        }
    }
}

/// Feeds `input` to the renderer one read at a time, so output keeps pace
/// with a slow producer.
fn stream<R: Read, W: Write>(mut input: R, renderer: &mut StreamRenderer<W>) -> Result<()> {
    let mut buf = [0u8; READ_SIZE];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e).context("failed to read input"),
        };
        renderer.render(&buf[..n])?;
    }
    renderer.finalize()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let themes = ThemeRegistry::builtin();

    if cli.list_themes {
        for name in themes.names() {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.init_config {
        let path = cli.config.clone().unwrap_or_else(Config::default_path);
        if path.exists() {
            bail!("config file already exists at {}", path.display());
        }
        let written = Config::write_default(&path)?;
        println!("Wrote default configuration to {}", written.display());
        return Ok(());
    }

    let file_config = Config::load(cli.config.as_deref())?.unwrap_or_default();
    let config = render_config(&cli, &file_config, Terminal::detect())?;
    log::debug!("render config: {config:?}");

    let input = open_input(cli.file.as_deref())?;
    let stdout = io::stdout().lock();
    let mut renderer = StreamRenderer::new(&config, &themes, stdout)?;
    stream(input, &mut renderer)
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
