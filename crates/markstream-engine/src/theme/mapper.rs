//! Pure mapping from render events to display attributes.

use crossterm::style::Color;

use crate::{
    parsing::{
        blocks::kinds::{CalloutKind, ProgressBand},
        inline::InlineStyle,
    },
    render::events::NodeKind,
};

use super::palette::{Palette, rgb};

/// Concrete display attributes for one piece of output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Attributes {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
    pub crossed_out: bool,
}

impl Attributes {
    fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

pub const PROGRESS_RED: Color = rgb(220, 53, 69);
pub const PROGRESS_ORANGE: Color = rgb(253, 126, 20);
pub const PROGRESS_YELLOW: Color = rgb(255, 193, 7);
pub const PROGRESS_GREEN: Color = rgb(40, 167, 69);
pub const PROGRESS_COMPLETE: Color = rgb(32, 201, 151);

pub fn progress_color(band: ProgressBand) -> Color {
    match band {
        ProgressBand::Red => PROGRESS_RED,
        ProgressBand::Orange => PROGRESS_ORANGE,
        ProgressBand::Yellow => PROGRESS_YELLOW,
        ProgressBand::Green => PROGRESS_GREEN,
        ProgressBand::Complete => PROGRESS_COMPLETE,
    }
}

fn callout_color(kind: CalloutKind, palette: &Palette) -> Color {
    match kind {
        CalloutKind::Note => palette.link,
        CalloutKind::Tip => palette.checkbox_checked,
        CalloutKind::Important => palette.inline_code,
        CalloutKind::Warning => palette.note,
        CalloutKind::Caution | CalloutKind::Failure | CalloutKind::Bug => PROGRESS_RED,
        CalloutKind::Question => PROGRESS_ORANGE,
        CalloutKind::Example => palette.highlight,
        CalloutKind::Quote => palette.muted,
    }
}

/// Attributes for a node kind at a nesting depth.
///
/// Kinds without a dedicated color use the palette's text color. Top-level
/// list markers are bold; nested ones are not.
pub fn attributes(kind: NodeKind, depth: usize, palette: &Palette) -> Attributes {
    let text = || Attributes::fg(palette.text);
    match kind {
        NodeKind::Heading(level) => {
            let a = Attributes::fg(palette.heading(level));
            if level <= 2 { a.bold() } else { a }
        }
        NodeKind::InlineCode => Attributes::fg(palette.inline_code),
        NodeKind::Link => Attributes {
            underline: true,
            ..Attributes::fg(palette.link)
        },
        NodeKind::Image => Attributes::fg(palette.link),
        NodeKind::FootnoteRef | NodeKind::FootnoteLabel => Attributes::fg(palette.link),
        NodeKind::Checkbox(true) => Attributes::fg(palette.checkbox_checked),
        NodeKind::Checkbox(false) => Attributes::fg(palette.checkbox_unchecked),
        NodeKind::ListMarker => {
            let a = Attributes::fg(palette.list_marker);
            if depth <= 1 { a.bold() } else { a }
        }
        NodeKind::QuoteBorder => Attributes::fg(palette.blockquote_border),
        NodeKind::Callout(c) => Attributes::fg(callout_color(c, palette)).bold(),
        NodeKind::CodeGutter => Attributes::fg(palette.line_number),
        NodeKind::CodeToken(t) => Attributes {
            fg: t.fg.map(|(r, g, b)| rgb(r, g, b)),
            bold: t.bold,
            italic: t.italic,
            underline: t.underline,
            ..Attributes::default()
        },
        NodeKind::TableBorder => Attributes::fg(palette.table_border),
        NodeKind::TableHeader => Attributes::fg(palette.table_header).bold(),
        NodeKind::Rule => Attributes::fg(palette.rule),
        NodeKind::Progress(band) => {
            let a = Attributes::fg(progress_color(band));
            if band == ProgressBand::Complete { a.bold() } else { a }
        }
        NodeKind::DefinitionTerm => Attributes::fg(palette.table_header).bold(),
        NodeKind::DefinitionMarker | NodeKind::Muted => Attributes {
            dim: true,
            ..Attributes::fg(palette.muted)
        },
        NodeKind::FootnoteHeading => Attributes::fg(palette.note).bold(),
        NodeKind::Text | NodeKind::Emoji | NodeKind::LineBreak | NodeKind::BlankLine => text(),
    }
}

/// Layers inline character styles over block attributes.
pub fn with_inline(mut attrs: Attributes, style: &InlineStyle, palette: &Palette) -> Attributes {
    attrs.bold |= style.bold;
    attrs.italic |= style.italic;
    if style.strikethrough {
        attrs.crossed_out = true;
        attrs.dim = true;
    }
    if style.highlight {
        attrs.fg = Some(palette.highlight);
    }
    if style.link.is_some() {
        attrs.underline = true;
        if attrs.fg.is_none() || attrs.fg == Some(palette.text) {
            attrs.fg = Some(palette.link);
        }
    }
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::highlight::TokenStyle;
    use rstest::rstest;

    #[test]
    fn headings_use_level_colors() {
        let p = Palette::github_dark();
        let h1 = attributes(NodeKind::Heading(1), 0, &p);
        let h3 = attributes(NodeKind::Heading(3), 0, &p);
        assert_eq!(h1.fg, Some(p.headings[0]));
        assert!(h1.bold);
        assert_eq!(h3.fg, Some(p.headings[2]));
        assert!(!h3.bold);
    }

    #[rstest]
    #[case(ProgressBand::Red, PROGRESS_RED)]
    #[case(ProgressBand::Orange, PROGRESS_ORANGE)]
    #[case(ProgressBand::Yellow, PROGRESS_YELLOW)]
    #[case(ProgressBand::Green, PROGRESS_GREEN)]
    #[case(ProgressBand::Complete, PROGRESS_COMPLETE)]
    fn progress_bands_have_distinct_colors(#[case] band: ProgressBand, #[case] color: Color) {
        let p = Palette::nord();
        assert_eq!(attributes(NodeKind::Progress(band), 0, &p).fg, Some(color));
    }

    #[test]
    fn failure_callouts_share_the_alarm_color() {
        let p = Palette::github_dark();
        for kind in [CalloutKind::Caution, CalloutKind::Failure, CalloutKind::Bug] {
            assert_eq!(attributes(NodeKind::Callout(kind), 1, &p).fg, Some(PROGRESS_RED));
        }
        assert_eq!(
            attributes(NodeKind::Callout(CalloutKind::Quote), 1, &p).fg,
            Some(p.muted)
        );
    }

    #[test]
    fn plain_kinds_fall_back_to_text() {
        let p = Palette::monokai();
        assert_eq!(attributes(NodeKind::Text, 3, &p), Attributes::fg(p.text));
        assert_eq!(attributes(NodeKind::Emoji, 0, &p), Attributes::fg(p.text));
    }

    #[test]
    fn code_tokens_keep_highlighter_colors() {
        let p = Palette::dracula();
        let t = TokenStyle {
            fg: Some((1, 2, 3)),
            bold: true,
            ..TokenStyle::default()
        };
        let a = attributes(NodeKind::CodeToken(t), 0, &p);
        assert_eq!(a.fg, Some(rgb(1, 2, 3)));
        assert!(a.bold);
    }

    #[test]
    fn inline_styles_layer_over_block() {
        let p = Palette::github_dark();
        let style = InlineStyle {
            bold: true,
            highlight: true,
            ..InlineStyle::default()
        };
        let a = with_inline(attributes(NodeKind::Text, 0, &p), &style, &p);
        assert!(a.bold);
        assert_eq!(a.fg, Some(p.highlight));
    }

    #[test]
    fn mapping_is_pure() {
        let p = Palette::one_dark();
        for kind in [NodeKind::Rule, NodeKind::TableHeader, NodeKind::ListMarker] {
            assert_eq!(attributes(kind, 2, &p), attributes(kind, 2, &p));
        }
    }
}
