use std::sync::LazyLock;

use regex::Regex;

static PROGRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-*+][ \t]+\[(\d{1,3})%\][ \t]*(.*)$").expect("progress pattern is valid")
});

/// Color band of a progress item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressBand {
    Red,
    Orange,
    Yellow,
    Green,
    Complete,
}

impl ProgressBand {
    pub fn for_percent(percent: u8) -> Self {
        match percent {
            0..=24 => ProgressBand::Red,
            25..=49 => ProgressBand::Orange,
            50..=74 => ProgressBand::Yellow,
            75..=99 => ProgressBand::Green,
            _ => ProgressBand::Complete,
        }
    }
}

/// Progress item: `- [n%] text`.
pub struct ProgressItem;

impl ProgressItem {
    pub const BAR_WIDTH: usize = 10;
    pub const FILLED: char = '█';
    pub const EMPTY: char = '░';
    pub const COMPLETE: &'static str = "✅";

    /// Returns the clamped percent and the item text.
    pub fn parse(remainder: &str) -> Option<(u8, String)> {
        let caps = PROGRESS.captures(remainder.trim_start())?;
        let raw: u16 = caps.get(1)?.as_str().parse().ok()?;
        let text = caps.get(2).map(|m| m.as_str().trim()).unwrap_or("");
        Some((raw.min(100) as u8, text.to_string()))
    }

    /// Bar glyphs for `percent`, rounded to the nearest cell.
    pub fn bar(percent: u8) -> String {
        let filled = (usize::from(percent.min(100)) * Self::BAR_WIDTH + 50) / 100;
        let mut s = String::with_capacity(Self::BAR_WIDTH * 3);
        s.extend(std::iter::repeat_n(Self::FILLED, filled));
        s.extend(std::iter::repeat_n(Self::EMPTY, Self::BAR_WIDTH - filled));
        s
    }
}
