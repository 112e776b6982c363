use std::sync::LazyLock;

use regex::Regex;

use super::ThematicBreak;

static ORDERED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,9})([.)])(?:[ \t]+(.*))?$").expect("ordered list pattern is valid")
});

/// The marker that opened a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*`, `+` or `•`.
    Bullet(char),
    /// `1.` or `1)`; the number is kept as written.
    Ordered { number: u32, delimiter: char },
}

impl ListMarker {
    /// Glyph cycle for unordered items by nesting depth.
    pub const BULLETS: [&'static str; 3] = ["●", "○", "■"];

    pub fn is_ordered(&self) -> bool {
        matches!(self, ListMarker::Ordered { .. })
    }

    /// The rendered marker for an item at `depth` (1-based).
    pub fn glyph(&self, depth: usize) -> String {
        match self {
            ListMarker::Bullet(_) => {
                let idx = depth.saturating_sub(1) % Self::BULLETS.len();
                Self::BULLETS[idx].to_string()
            }
            ListMarker::Ordered { number, delimiter } => format!("{number}{delimiter}"),
        }
    }
}

/// A recognised list item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItemOpen {
    /// Column of the marker.
    pub indent: usize,
    /// Marker width including the following space.
    pub width: usize,
    pub marker: ListMarker,
    pub text: String,
}

pub struct ListItem;

impl ListItem {
    pub const BULLET_CHARS: [char; 4] = ['-', '*', '+', '•'];

    pub fn parse(remainder: &str, indent: usize) -> Option<ListItemOpen> {
        let t = remainder.trim_start();
        if ThematicBreak::matches(t) {
            return None;
        }

        let first = t.chars().next()?;
        if Self::BULLET_CHARS.contains(&first) {
            let rest = &t[first.len_utf8()..];
            if !rest.starts_with([' ', '\t']) {
                return None;
            }
            let text = rest.trim();
            if text.is_empty() {
                return None;
            }
            return Some(ListItemOpen {
                indent,
                width: 2,
                marker: ListMarker::Bullet(first),
                text: text.to_string(),
            });
        }

        let caps = ORDERED.captures(t)?;
        let text = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
        if text.is_empty() {
            return None;
        }
        let digits = caps.get(1)?.as_str();
        let delimiter = caps.get(2)?.as_str().chars().next()?;
        Some(ListItemOpen {
            indent,
            width: digits.len() + 2,
            marker: ListMarker::Ordered {
                number: digits.parse().ok()?,
                delimiter,
            },
            text: text.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bullet_items() {
        for src in ["- item", "* item", "+ item", "• item"] {
            let item = ListItem::parse(src, 0).unwrap();
            assert_eq!(item.text, "item");
            assert_eq!(item.width, 2);
            assert!(!item.marker.is_ordered());
        }
    }

    #[test]
    fn parses_ordered_items() {
        let item = ListItem::parse("12. twelfth", 3).unwrap();
        assert_eq!(item.indent, 3);
        assert_eq!(item.width, 4);
        assert_eq!(
            item.marker,
            ListMarker::Ordered {
                number: 12,
                delimiter: '.'
            }
        );
        assert_eq!(item.marker.glyph(1), "12.");
    }

    #[test]
    fn rejects_non_items() {
        assert_eq!(ListItem::parse("-item", 0), None);
        assert_eq!(ListItem::parse("- ", 0), None);
        assert_eq!(ListItem::parse("* * *", 0), None);
        assert_eq!(ListItem::parse("2024.", 0), None);
        assert_eq!(ListItem::parse("3.14 is pi", 0), None);
    }

    #[test]
    fn bullet_glyphs_cycle_by_depth() {
        let m = ListMarker::Bullet('-');
        assert_eq!(m.glyph(1), "●");
        assert_eq!(m.glyph(2), "○");
        assert_eq!(m.glyph(3), "■");
        assert_eq!(m.glyph(4), "●");
    }
}
