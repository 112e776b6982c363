// Bench helpers; each bench file uses a different subset.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and `code`.\n\n- Bullet point\n  - Nested item\n- [x] Another item\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n| a | b |\n|---|--:|\n| x | 1 |\n\nA note[^n].\n\n[^n]: footnote text\n\n";
    base.repeat(size)
}

/// Splits `content` into pieces of roughly the size a model API streams.
#[allow(dead_code)]
pub fn token_chunks(content: &str, size: usize) -> Vec<&[u8]> {
    content.as_bytes().chunks(size).collect()
}
