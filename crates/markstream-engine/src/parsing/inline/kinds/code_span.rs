/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Given `s[at..]` starting a backtick run, returns the byte range of the
    /// content and the index just past the matching closing run.
    ///
    /// A closing run must have exactly the opener's length.
    pub fn find(s: &str, at: usize) -> Option<(usize, usize, usize)> {
        let b = s.as_bytes();
        let open = run_len(b, at, Self::TICK);
        if open == 0 {
            return None;
        }
        let inner_start = at + open;
        let mut j = inner_start;
        while j < b.len() {
            if b[j] == Self::TICK {
                let run = run_len(b, j, Self::TICK);
                if run == open {
                    return Some((inner_start, j, j + run));
                }
                j += run;
            } else {
                j += 1;
            }
        }
        None
    }
}

pub(crate) fn run_len(b: &[u8], at: usize, byte: u8) -> usize {
    b.get(at..)
        .map(|rest| rest.iter().take_while(|&&x| x == byte).count())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_tick_span() {
        assert_eq!(CodeSpan::find("`a` b", 0), Some((1, 2, 3)));
    }

    #[test]
    fn double_tick_span_may_contain_single() {
        assert_eq!(CodeSpan::find("``a`b``", 0), Some((2, 5, 7)));
    }

    #[test]
    fn unmatched_run() {
        assert_eq!(CodeSpan::find("``a`", 0), None);
        assert_eq!(CodeSpan::find("x", 0), None);
    }
}
