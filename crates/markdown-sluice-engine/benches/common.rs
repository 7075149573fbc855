// Benchmark helper functions - only some of them are used by each bench
// target, and rustc checks each target separately.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **some** content and a [link](https://example.com).\n\n> Quoted *text*\n\n- Bullet point\n- Another item\n\n1. First\n2. Second\n\n```rust\nfn example() {\n    println!(\"<Hello>\");\n}\n```\n\n---\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!(
            "Line {i} with *italic*, **bold**, ~~struck~~, `code`, <https://x.io/{i}>, ![img](/{i}.png) and a note[^{i}] \\*escaped\\*.\n"
        ));
    }
    content
}
