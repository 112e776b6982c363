//! The streaming entry point.

use std::io::Write;

use log::debug;

use crate::{
    config::RenderConfig,
    error::EngineError,
    parsing::{LineAccumulator, blocks::BlockBuilder},
    render::{
        BoxTableLayout, FlushScheduler, OutputWriter, SyntaxHighlighter, SyntectHighlighter,
        TableLayout, WriterOptions,
    },
    theme::ThemeRegistry,
};

/// Renders one Markdown document to `W` as it arrives.
///
/// Feed chunks of any size with [`render`](Self::render), then call
/// [`finalize`](Self::finalize) once. Output for a construct is written as
/// soon as it is safe, and never rewritten.
pub struct StreamRenderer<W: Write> {
    lines: LineAccumulator,
    builder: BlockBuilder,
    scheduler: FlushScheduler,
    writer: OutputWriter<W>,
    finalized: bool,
}

impl<W: Write> StreamRenderer<W> {
    /// A renderer using syntect highlighting and boxed tables.
    pub fn new(config: &RenderConfig, themes: &ThemeRegistry, sink: W) -> Result<Self, EngineError> {
        Self::with_collaborators(
            config,
            themes,
            sink,
            Box::new(SyntectHighlighter),
            Box::new(BoxTableLayout),
        )
    }

    pub fn with_collaborators(
        config: &RenderConfig,
        themes: &ThemeRegistry,
        sink: W,
        highlighter: Box<dyn SyntaxHighlighter>,
        layout: Box<dyn TableLayout>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        let mut palette = themes.get(&config.theme)?.clone();
        if let Some(color) = config.inline_code_color {
            palette.inline_code = color;
        }
        debug!(
            "renderer theme={} width={} mode={:?}",
            palette.name, config.width, config.code_mode
        );

        let scheduler = FlushScheduler::new(
            highlighter,
            layout,
            palette.syntax_theme.clone(),
            config.code_mode,
            config.line_numbers,
            config.width,
        );
        let writer = OutputWriter::new(
            sink,
            palette,
            WriterOptions {
                color: config.color,
                code_background: config.code_background,
                width: config.width,
            },
        );
        Ok(Self {
            lines: LineAccumulator::new(),
            builder: BlockBuilder::new(),
            scheduler,
            writer,
            finalized: false,
        })
    }

    /// Ingests one chunk and writes whatever it completes.
    pub fn render(&mut self, chunk: impl AsRef<[u8]>) -> Result<(), EngineError> {
        if self.finalized {
            return Err(EngineError::Finalized);
        }
        for line in self.lines.feed(chunk.as_ref()) {
            self.line(&line)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Ends the document: the trailing fragment becomes a line, open
    /// constructs are closed, held output is drained and footnotes are
    /// written. Further calls to [`render`](Self::render) fail.
    pub fn finalize(&mut self) -> Result<(), EngineError> {
        if self.finalized {
            return Err(EngineError::Finalized);
        }
        self.finalized = true;
        if let Some(line) = self.lines.drain_final() {
            self.line(&line)?;
        }
        for ev in self.builder.finish() {
            let events = self.scheduler.on_block(ev);
            self.writer.write_events(&events)?;
        }
        let events = self.scheduler.drain();
        self.writer.write_events(&events)?;
        self.writer.flush()?;
        debug!("finalized after {} bytes", self.lines.consumed());
        Ok(())
    }

    fn line(&mut self, line: &str) -> Result<(), EngineError> {
        for ev in self.builder.push(line) {
            let events = self.scheduler.on_block(ev);
            self.writer.write_events(&events)?;
        }
        Ok(())
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Bytes handed on as complete lines so far.
    pub fn bytes_consumed(&self) -> usize {
        self.lines.consumed()
    }

    /// Bytes held as an incomplete trailing line.
    pub fn bytes_pending(&self) -> usize {
        self.lines.pending_len()
    }

    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}
