use crossterm::style::Color;

/// Named colors of one theme.
///
/// The engine only reads palettes; registries hand them out by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub name: String,
    /// syntect theme used for fenced code.
    pub syntax_theme: String,
    /// Default text color; `Color::Reset` keeps the terminal's own.
    pub text: Color,
    pub headings: [Color; 6],
    pub inline_code: Color,
    pub link: Color,
    pub blockquote_border: Color,
    pub table_border: Color,
    pub table_header: Color,
    pub checkbox_checked: Color,
    pub checkbox_unchecked: Color,
    pub rule: Color,
    pub note: Color,
    pub list_marker: Color,
    pub highlight: Color,
    pub code_background: Color,
    pub line_number: Color,
    pub muted: Color,
}

pub(crate) const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

/// Parses `#rrggbb` (the leading `#` is optional).
pub fn parse_hex(s: &str) -> Option<Color> {
    let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Palette {
    pub fn heading(&self, level: u8) -> Color {
        let idx = usize::from(level.clamp(1, 6)) - 1;
        self.headings[idx]
    }

    pub fn github_dark() -> Self {
        Self {
            name: "github-dark".into(),
            syntax_theme: "base16-ocean.dark".into(),
            text: Color::Reset,
            headings: [
                rgb(88, 166, 255),
                rgb(121, 192, 255),
                rgb(150, 203, 254),
                rgb(180, 215, 253),
                rgb(200, 225, 252),
                rgb(220, 235, 251),
            ],
            inline_code: rgb(201, 158, 255),
            link: rgb(88, 166, 255),
            blockquote_border: Color::DarkGrey,
            table_border: Color::DarkGrey,
            table_header: rgb(88, 166, 255),
            checkbox_checked: rgb(46, 160, 67),
            checkbox_unchecked: Color::DarkGrey,
            rule: Color::DarkGrey,
            note: rgb(229, 192, 123),
            list_marker: rgb(88, 166, 255),
            highlight: rgb(255, 255, 0),
            code_background: rgb(22, 27, 34),
            line_number: Color::DarkGrey,
            muted: Color::DarkGrey,
        }
    }

    pub fn monokai() -> Self {
        let grey = rgb(117, 113, 94);
        Self {
            name: "monokai".into(),
            syntax_theme: "base16-eighties.dark".into(),
            text: Color::Reset,
            headings: [
                rgb(249, 38, 114),
                rgb(102, 217, 239),
                rgb(166, 226, 46),
                rgb(253, 151, 31),
                rgb(174, 129, 255),
                rgb(230, 219, 116),
            ],
            inline_code: rgb(174, 129, 255),
            link: rgb(102, 217, 239),
            blockquote_border: grey,
            table_border: grey,
            table_header: rgb(249, 38, 114),
            checkbox_checked: rgb(166, 226, 46),
            checkbox_unchecked: grey,
            rule: grey,
            note: rgb(230, 219, 116),
            list_marker: rgb(102, 217, 239),
            highlight: rgb(230, 219, 116),
            code_background: rgb(39, 40, 34),
            line_number: grey,
            muted: grey,
        }
    }

    pub fn dracula() -> Self {
        let comment = rgb(98, 114, 164);
        Self {
            name: "dracula".into(),
            syntax_theme: "base16-mocha.dark".into(),
            text: Color::Reset,
            headings: [
                rgb(255, 121, 198),
                rgb(189, 147, 249),
                rgb(139, 233, 253),
                rgb(80, 250, 123),
                rgb(255, 184, 108),
                rgb(241, 250, 140),
            ],
            inline_code: rgb(189, 147, 249),
            link: rgb(139, 233, 253),
            blockquote_border: comment,
            table_border: comment,
            table_header: rgb(255, 121, 198),
            checkbox_checked: rgb(80, 250, 123),
            checkbox_unchecked: comment,
            rule: comment,
            note: rgb(241, 250, 140),
            list_marker: rgb(189, 147, 249),
            highlight: rgb(241, 250, 140),
            code_background: rgb(40, 42, 54),
            line_number: comment,
            muted: comment,
        }
    }

    pub fn nord() -> Self {
        let polar = rgb(76, 86, 106);
        Self {
            name: "nord".into(),
            syntax_theme: "base16-ocean.dark".into(),
            text: Color::Reset,
            headings: [
                rgb(136, 192, 208),
                rgb(129, 161, 193),
                rgb(94, 129, 172),
                rgb(143, 188, 187),
                rgb(163, 190, 140),
                rgb(191, 97, 106),
            ],
            inline_code: rgb(180, 142, 173),
            link: rgb(136, 192, 208),
            blockquote_border: polar,
            table_border: polar,
            table_header: rgb(136, 192, 208),
            checkbox_checked: rgb(163, 190, 140),
            checkbox_unchecked: polar,
            rule: polar,
            note: rgb(235, 203, 139),
            list_marker: rgb(136, 192, 208),
            highlight: rgb(235, 203, 139),
            code_background: rgb(46, 52, 64),
            line_number: polar,
            muted: polar,
        }
    }

    pub fn one_dark() -> Self {
        let gutter = rgb(92, 99, 112);
        Self {
            name: "one-dark".into(),
            syntax_theme: "base16-eighties.dark".into(),
            text: Color::Reset,
            headings: [
                rgb(224, 108, 117),
                rgb(209, 154, 102),
                rgb(229, 192, 123),
                rgb(152, 195, 121),
                rgb(86, 182, 194),
                rgb(97, 175, 239),
            ],
            inline_code: rgb(198, 120, 221),
            link: rgb(97, 175, 239),
            blockquote_border: gutter,
            table_border: gutter,
            table_header: rgb(224, 108, 117),
            checkbox_checked: rgb(152, 195, 121),
            checkbox_unchecked: gutter,
            rule: gutter,
            note: rgb(229, 192, 123),
            list_marker: rgb(97, 175, 239),
            highlight: rgb(229, 192, 123),
            code_background: rgb(40, 44, 52),
            line_number: gutter,
            muted: gutter,
        }
    }

    fn solarized(name: &str, syntax_theme: &str, base: Color, background: Color) -> Self {
        Self {
            name: name.into(),
            syntax_theme: syntax_theme.into(),
            text: Color::Reset,
            headings: [
                rgb(38, 139, 210),
                rgb(42, 161, 152),
                rgb(133, 153, 0),
                rgb(181, 137, 0),
                rgb(203, 75, 22),
                rgb(211, 54, 130),
            ],
            inline_code: rgb(108, 113, 196),
            link: rgb(38, 139, 210),
            blockquote_border: base,
            table_border: base,
            table_header: rgb(133, 153, 0),
            checkbox_checked: rgb(133, 153, 0),
            checkbox_unchecked: base,
            rule: base,
            note: rgb(181, 137, 0),
            list_marker: rgb(38, 139, 210),
            highlight: rgb(181, 137, 0),
            code_background: background,
            line_number: base,
            muted: base,
        }
    }

    pub fn solarized_dark() -> Self {
        Self::solarized(
            "solarized-dark",
            "Solarized (dark)",
            rgb(88, 110, 117),
            rgb(0, 43, 54),
        )
    }

    pub fn solarized_light() -> Self {
        Self::solarized(
            "solarized-light",
            "Solarized (light)",
            rgb(147, 161, 161),
            rgb(253, 246, 227),
        )
    }
}
