//! Append-only terminal output.
//!
//! The writer never moves the cursor and never rewrites bytes it already
//! wrote. Every styled piece ends with an attribute reset, so output stays
//! correct wherever the stream is cut off.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{Attributes, Palette, attributes, with_inline};

use super::events::{NodeKind, RenderEvent};

const OSC8_OPEN: &str = "\x1b]8;;";
const OSC8_END: &str = "\x1b\\";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterOptions {
    /// Emit escape sequences at all.
    pub color: bool,
    /// Paint the palette's code background behind code lines.
    pub code_background: bool,
    /// Terminal width, used to extend code backgrounds.
    pub width: usize,
}

#[derive(Debug)]
struct OpenLink {
    url: String,
    text: String,
}

pub struct OutputWriter<W: Write> {
    sink: W,
    palette: Palette,
    options: WriterOptions,
    /// Display columns written on the current line.
    column: usize,
    /// Something was written on the current line.
    line_open: bool,
    line_has_code: bool,
    last_line_blank: bool,
    written_any: bool,
    link: Option<OpenLink>,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(sink: W, palette: Palette, options: WriterOptions) -> Self {
        Self {
            sink,
            palette,
            options,
            column: 0,
            line_open: false,
            line_has_code: false,
            last_line_blank: false,
            written_any: false,
            link: None,
        }
    }

    pub fn write_events(&mut self, events: &[RenderEvent]) -> io::Result<()> {
        for ev in events {
            self.write_event(ev)?;
        }
        Ok(())
    }

    pub fn write_event(&mut self, ev: &RenderEvent) -> io::Result<()> {
        match ev.kind {
            NodeKind::BlankLine => self.blank_line(),
            NodeKind::LineBreak => self.end_line(),
            _ => self.write_piece(ev),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.sink
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn blank_line(&mut self) -> io::Result<()> {
        if self.line_open {
            self.end_line()?;
        }
        if !self.written_any || self.last_line_blank {
            return Ok(());
        }
        writeln!(self.sink)?;
        self.last_line_blank = true;
        Ok(())
    }

    fn end_line(&mut self) -> io::Result<()> {
        self.close_link()?;
        if self.line_has_code && self.options.code_background && self.options.color {
            let pad = self.options.width.saturating_sub(self.column);
            if pad > 0 {
                queue!(
                    self.sink,
                    SetBackgroundColor(self.palette.code_background),
                    Print(" ".repeat(pad)),
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }
        writeln!(self.sink)?;
        self.last_line_blank = !self.line_open;
        self.written_any = true;
        self.line_open = false;
        self.line_has_code = false;
        self.column = 0;
        Ok(())
    }

    fn write_piece(&mut self, ev: &RenderEvent) -> io::Result<()> {
        if ev.content.is_empty() {
            return Ok(());
        }
        match (&ev.style.link, &self.link) {
            (Some(url), Some(open)) if *url == open.url => {}
            (Some(url), _) => {
                self.close_link()?;
                self.open_link(url)?;
            }
            (None, Some(_)) => self.close_link()?,
            (None, None) => {}
        }

        let is_code = matches!(ev.kind, NodeKind::CodeGutter | NodeKind::CodeToken(_));
        if self.options.color {
            let mut attrs = with_inline(
                attributes(ev.kind, ev.depth, &self.palette),
                &ev.style,
                &self.palette,
            );
            if is_code && self.options.code_background {
                attrs.bg = Some(self.palette.code_background);
            }
            self.styled(&attrs, &ev.content)?;
        } else {
            write!(self.sink, "{}", ev.content)?;
        }

        if let Some(link) = &mut self.link {
            link.text.push_str(&ev.content);
        }
        self.column += ev.content.width();
        self.line_open = true;
        self.line_has_code |= is_code;
        Ok(())
    }

    fn styled(&mut self, attrs: &Attributes, text: &str) -> io::Result<()> {
        // The terminal's own color needs no escape.
        let attrs = Attributes {
            fg: attrs.fg.filter(|c| *c != Color::Reset),
            ..*attrs
        };
        if attrs.is_plain() {
            return write!(self.sink, "{text}");
        }
        if let Some(c) = attrs.fg {
            queue!(self.sink, SetForegroundColor(c))?;
        }
        if let Some(c) = attrs.bg {
            queue!(self.sink, SetBackgroundColor(c))?;
        }
        for (on, attr) in [
            (attrs.bold, Attribute::Bold),
            (attrs.italic, Attribute::Italic),
            (attrs.underline, Attribute::Underlined),
            (attrs.dim, Attribute::Dim),
            (attrs.crossed_out, Attribute::CrossedOut),
        ] {
            if on {
                queue!(self.sink, SetAttribute(attr))?;
            }
        }
        queue!(self.sink, Print(text), SetAttribute(Attribute::Reset))
    }

    fn open_link(&mut self, url: &str) -> io::Result<()> {
        if self.options.color {
            write!(self.sink, "{OSC8_OPEN}{url}{OSC8_END}")?;
        }
        self.link = Some(OpenLink {
            url: url.to_string(),
            text: String::new(),
        });
        Ok(())
    }

    /// Without color the destination follows the text, unless the text
    /// already is the destination.
    fn close_link(&mut self) -> io::Result<()> {
        let Some(link) = self.link.take() else {
            return Ok(());
        };
        if self.options.color {
            write!(self.sink, "{OSC8_OPEN}{OSC8_END}")?;
        } else if link.text != link.url {
            let suffix = format!(" ({})", link.url);
            self.column += suffix.width();
            write!(self.sink, "{suffix}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::InlineStyle;
    use crate::render::highlight::TokenStyle;
    use pretty_assertions::assert_eq;

    fn writer(color: bool) -> OutputWriter<Vec<u8>> {
        OutputWriter::new(
            Vec::new(),
            Palette::github_dark(),
            WriterOptions {
                color,
                code_background: false,
                width: 20,
            },
        )
    }

    fn text(w: OutputWriter<Vec<u8>>) -> String {
        String::from_utf8(w.into_inner()).unwrap()
    }

    fn linked(content: &str, url: &str) -> RenderEvent {
        RenderEvent::new(content, NodeKind::Link).styled(InlineStyle {
            link: Some(url.into()),
            ..InlineStyle::default()
        })
    }

    #[test]
    fn plain_output_without_color() {
        let mut w = writer(false);
        w.write_events(&[
            RenderEvent::new("Title", NodeKind::Heading(1)),
            RenderEvent::line_break(),
        ])
        .unwrap();
        assert_eq!(text(w), "Title\n");
    }

    #[test]
    fn bold_heading_with_color() {
        let mut w = writer(true);
        w.write_event(&RenderEvent::new("T", NodeKind::Heading(1)))
            .unwrap();
        let out = text(w);
        assert!(out.contains("\x1b[1m"), "{out:?}");
        assert!(out.ends_with("T\x1b[0m"), "{out:?}");
    }

    #[test]
    fn blank_lines_collapse_and_skip_document_start() {
        let mut w = writer(false);
        w.write_events(&[
            RenderEvent::blank_line(),
            RenderEvent::new("a", NodeKind::Text),
            RenderEvent::blank_line(),
            RenderEvent::blank_line(),
            RenderEvent::new("b", NodeKind::Text),
            RenderEvent::line_break(),
        ])
        .unwrap();
        assert_eq!(text(w), "a\n\nb\n");
    }

    #[test]
    fn empty_line_break_is_kept() {
        let mut w = writer(false);
        w.write_events(&[
            RenderEvent::line_break(),
            RenderEvent::line_break(),
        ])
        .unwrap();
        assert_eq!(text(w), "\n\n");
    }

    #[test]
    fn links_without_color_show_destination() {
        let mut w = writer(false);
        w.write_events(&[
            linked("docs", "https://d.rs"),
            RenderEvent::new(" and ", NodeKind::Text),
            linked("https://x.io", "https://x.io"),
            RenderEvent::line_break(),
        ])
        .unwrap();
        assert_eq!(text(w), "docs (https://d.rs) and https://x.io\n");
    }

    #[test]
    fn links_with_color_use_osc8() {
        let mut w = writer(true);
        w.write_events(&[linked("docs", "https://d.rs"), RenderEvent::line_break()])
            .unwrap();
        let out = text(w);
        assert!(out.starts_with("\x1b]8;;https://d.rs\x1b\\"), "{out:?}");
        assert!(out.contains("\x1b]8;;\x1b\\\n"), "{out:?}");
    }

    #[test]
    fn code_background_fills_width() {
        let mut w = OutputWriter::new(
            Vec::new(),
            Palette::github_dark(),
            WriterOptions {
                color: true,
                code_background: true,
                width: 10,
            },
        );
        w.write_events(&[
            RenderEvent::new("abc", NodeKind::CodeToken(TokenStyle::default())),
            RenderEvent::line_break(),
        ])
        .unwrap();
        let out = text(w);
        assert!(out.contains(&" ".repeat(7)), "{out:?}");
        assert!(out.contains("\x1b[48;2;22;27;34m"), "{out:?}");
    }
}
