use std::sync::LazyLock;

use regex::Regex;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([^\s:][^:]*?)[ \t]+:[ \t]+(\S.*)$").expect("definition pattern is valid")
});

/// Definition list entry `Term : Definition` and continuation `: more`.
///
/// The term may carry inline formatting such as `**Term**`. Block openers
/// are tried before this one, so a list marker or heading never reaches it.
pub struct Definition;

impl Definition {
    pub const MARKER: char = ':';

    pub fn parse(remainder: &str) -> Option<(String, String)> {
        let caps = ENTRY.captures(remainder.trim())?;
        let term = caps.get(1)?.as_str().trim();
        let def = caps.get(2)?.as_str().trim();
        Some((term.to_string(), def.to_string()))
    }

    pub fn continuation(remainder: &str) -> Option<String> {
        let t = remainder.trim_start().strip_prefix(Self::MARKER)?;
        if !t.starts_with([' ', '\t']) {
            return None;
        }
        let t = t.trim();
        (!t.is_empty()).then(|| t.to_string())
    }
}
