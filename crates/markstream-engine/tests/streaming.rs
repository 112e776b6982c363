use markstream_engine::{CodeMode, EngineError, RenderConfig, StreamRenderer, ThemeRegistry};
use pretty_assertions::assert_eq;
use rstest::rstest;

const DOCUMENT: &str = "# Streaming ✨ test

Some **bold**, *italic*, ==marked== and ~~gone~~ text with `code` :rocket:.
A [link](https://example.com) and a note[^b] then another[^a].

> [!NOTE]
> Callouts keep their border.

- first
  - second
    - third
- [x] checked
1. ordered

- [60%] progress

| name | qty |
|:-----|----:|
| äpfel | 3 |
| pears | 12 |

```rust
fn main() {
    println!(\"hi\");
}
```

Term : definition

[^a]: alpha note
[^b]: beta note
";

fn config(color: bool) -> RenderConfig {
    RenderConfig {
        color,
        ..RenderConfig::default()
    }
}

fn render_chunks<'a>(config: &RenderConfig, chunks: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut r = StreamRenderer::new(config, &ThemeRegistry::builtin(), Vec::new()).unwrap();
    for chunk in chunks {
        r.render(chunk).unwrap();
    }
    r.finalize().unwrap();
    String::from_utf8(r.into_inner()).unwrap()
}

fn render_plain(src: &str) -> String {
    render_chunks(&config(false), [src.as_bytes()])
}

#[test]
fn fixture_basics() {
    assert_fixture("basics");
}

#[test]
fn fixture_blocks() {
    assert_fixture("blocks");
}

fn assert_fixture(name: &str) {
    let dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{dir}/{name}.txt")).unwrap();
    assert_eq!(render_plain(&md), expected);
}

#[test]
fn output_is_independent_of_split_point() {
    let bytes = DOCUMENT.as_bytes();
    let cfg = config(true);
    let whole = render_chunks(&cfg, [bytes]);
    for at in 0..=bytes.len() {
        let split = render_chunks(&cfg, [&bytes[..at], &bytes[at..]]);
        assert_eq!(split, whole, "split at byte {at}");
    }
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(7)]
#[case(64)]
fn output_is_independent_of_chunk_size(#[case] size: usize) {
    let cfg = config(true);
    let whole = render_chunks(&cfg, [DOCUMENT.as_bytes()]);
    assert_eq!(render_chunks(&cfg, DOCUMENT.as_bytes().chunks(size)), whole);
}

#[test]
fn buffered_code_matches_across_chunkings() {
    let cfg = RenderConfig {
        code_mode: CodeMode::Buffered,
        ..config(true)
    };
    let whole = render_chunks(&cfg, [DOCUMENT.as_bytes()]);
    assert_eq!(render_chunks(&cfg, DOCUMENT.as_bytes().chunks(5)), whole);
}

#[test]
fn bold_split_across_chunks_is_bold() {
    let src = "some **bold** text\n";
    for at in 0..src.len() {
        let out = render_chunks(
            &config(true),
            [src[..at].as_bytes(), src[at..].as_bytes()],
        );
        assert!(out.contains("\x1b[1mbold\x1b[0m"), "split at {at}: {out:?}");
        assert!(!out.contains("**"), "split at {at}: {out:?}");
    }
}

#[test]
fn table_waits_for_terminator() {
    let mut r =
        StreamRenderer::new(&config(false), &ThemeRegistry::builtin(), Vec::new()).unwrap();
    r.render("| a | b |\n|---|---|\n| 1 | 2 |\n").unwrap();
    assert!(r.get_ref().is_empty());
    r.render("\n").unwrap();
    let out = String::from_utf8(r.get_ref().clone()).unwrap();
    assert_eq!(
        out,
        "┌───┬───┐\n│ a │ b │\n├───┼───┤\n│ 1 │ 2 │\n└───┴───┘\n\n"
    );
}

#[test]
fn table_at_eof_is_flushed_by_finalize() {
    let out = render_plain("| a |\n|---|\n| 1 |");
    assert_eq!(out, "┌───┐\n│ a │\n├───┤\n│ 1 │\n└───┘\n");
}

#[test]
fn unconfirmed_table_is_paragraph_text() {
    assert_eq!(render_plain("| a | b |\nplain\n"), "| a | b |\nplain\n");
}

#[test]
fn footnotes_follow_first_reference() {
    let out = render_plain("First[^b] then[^a].\n\n[^a]: alpha\n[^b]: beta\n");
    assert_eq!(
        out,
        "First[1] then[2].\n\nFootnotes:\n[1] b: beta\n[2] a: alpha\n"
    );
}

#[test]
fn finalize_drains_fence_before_footnotes() {
    let out = render_plain("see[^one] and[^two]\n\n```rust\nlet x = 1;");
    assert_eq!(
        out,
        "see[1] and[2]\n\n  1 │ let x = 1;\n\nFootnotes:\n[1] one: (undefined)\n[2] two: (undefined)\n"
    );
}

#[rstest]
#[case(0, "220;53;69")]
#[case(24, "220;53;69")]
#[case(25, "253;126;20")]
#[case(49, "253;126;20")]
#[case(50, "255;193;7")]
#[case(74, "255;193;7")]
#[case(75, "40;167;69")]
#[case(99, "40;167;69")]
#[case(100, "32;201;151")]
fn progress_bands(#[case] percent: u8, #[case] rgb: &str) {
    let out = render_chunks(&config(true), [format!("- [{percent}%] task\n").as_bytes()]);
    assert!(out.contains(&format!("\x1b[38;2;{rgb}m")), "{out:?}");
    assert_eq!(out.contains("✅"), percent == 100);
}

#[test]
fn nested_lists_use_depth_glyphs() {
    assert_eq!(
        render_plain("- a\n  - b\n    - c\n"),
        "● a\n  ○ b\n    ■ c\n"
    );
    assert_eq!(render_plain("- a\n- b\n"), "● a\n● b\n");
}

#[test]
fn render_after_finalize_is_an_error() {
    let mut r =
        StreamRenderer::new(&config(false), &ThemeRegistry::builtin(), Vec::new()).unwrap();
    r.render("text").unwrap();
    r.finalize().unwrap();
    assert!(matches!(r.render("more"), Err(EngineError::Finalized)));
}

#[test]
fn unknown_theme_is_rejected() {
    let cfg = RenderConfig {
        theme: "neon".into(),
        ..RenderConfig::default()
    };
    let err = StreamRenderer::new(&cfg, &ThemeRegistry::builtin(), Vec::new())
        .err()
        .unwrap();
    assert!(matches!(err, EngineError::UnknownTheme { ref name, .. } if name == "neon"));
}

#[test]
fn zero_width_is_rejected() {
    let cfg = RenderConfig {
        width: 0,
        ..RenderConfig::default()
    };
    assert!(matches!(
        StreamRenderer::new(&cfg, &ThemeRegistry::builtin(), Vec::new()),
        Err(EngineError::InvalidOption { .. })
    ));
}

#[test]
fn plain_output_has_no_escapes() {
    assert!(!render_plain(DOCUMENT).contains('\x1b'));
}

#[test]
fn math_is_shown_verbatim() {
    let src = "Area \\(a*b*c\\) and \\[x_1\\]\n";
    assert_eq!(render_plain(src), src);
    assert!(!render_chunks(&config(true), [src.as_bytes()]).contains("\x1b[3m"));
}

#[test]
fn br_tags_break_inside_quotes() {
    assert_eq!(
        render_plain("> one<br>two<br/>three\n"),
        "│ one\n│ two\n│ three\n"
    );
}

#[test]
fn border_lines_render_as_quotes() {
    assert_eq!(
        render_plain("│ boxed quote\n| piped quote\n"),
        "│ boxed quote\n│ piped quote\n"
    );
}

#[rstest]
#[case("QUESTION", "❓")]
#[case("FAILURE", "✖")]
#[case("BUG", "🐛")]
#[case("EXAMPLE", "📋")]
#[case("QUOTE", "❝")]
fn extended_callouts_get_headers(#[case] name: &str, #[case] icon: &str) {
    assert_eq!(
        render_plain(&format!("> [!{name}] why\n")),
        format!("│ {icon} {name} why\n")
    );
}

#[test]
fn formatted_definition_terms() {
    assert_eq!(
        render_plain("**Python** : A language\n"),
        "Python\n  : A language\n"
    );
    let colored = render_chunks(&config(true), [b"**Python** : A language\n".as_slice()]);
    assert!(!colored.contains("**"), "{colored:?}");
}

#[test]
fn header_row_without_cells_stays_visible() {
    assert_eq!(render_plain("|\n|---|\n"), "|\n|---|\n");
}

#[test]
fn quote_depth_is_unbounded() {
    let src = format!("{}x\n", ">".repeat(300));
    assert_eq!(render_plain(&src), format!("{}x\n", "│ ".repeat(300)));
}

#[test]
fn table_in_list_item_keeps_indent() {
    assert_eq!(
        render_plain("- item\n  | a | b |\n  |---|---|\n  | 1 | 2 |\n"),
        "● item\n  ┌───┬───┐\n  │ a │ b │\n  ├───┼───┤\n  │ 1 │ 2 │\n  └───┴───┘\n"
    );
}
