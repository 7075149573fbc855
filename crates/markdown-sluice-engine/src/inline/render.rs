use crate::{emit::HtmlBuffer, grammar::kinds::footnote_name};

use super::{cursor::Cursor, parser::next_token, toggles::InlineToggles, types::InlineToken};

/// Renders one trimmed line of inline content into `out`.
///
/// Toggle state carries over between calls for the lines of one block. No
/// line terminator is written; the caller decides what follows the line.
pub fn render_line(line: &[u8], toggles: &mut InlineToggles, out: &mut HtmlBuffer) {
    let mut cur = Cursor::new(line);
    while let Some(token) = next_token(&mut cur) {
        emit_token(token, toggles, out);
    }
}

fn emit_token(token: InlineToken<'_>, toggles: &mut InlineToggles, out: &mut HtmlBuffer) {
    match token {
        InlineToken::QuickLink { url } => {
            out.raw("<a href=\"");
            out.attr(url);
            out.raw("\">");
            out.text(url);
            out.raw("</a>");
        }
        InlineToken::Link { text, url } => {
            out.raw("<a href=\"");
            out.attr(url);
            out.raw("\">");
            out.text(text);
            out.raw("</a>");
        }
        InlineToken::Image { alt, src } => {
            out.raw("<img alt=\"");
            out.attr(alt);
            out.raw("\" src=\"");
            out.attr(src);
            out.raw("\" />");
        }
        InlineToken::FootnoteRef { digits } => {
            let name = footnote_name(digits);
            out.raw("<sup id=\"fnref:");
            out.attr(name);
            out.raw("\" role=\"doc-noteref\"><a href=\"#fn:");
            out.attr(name);
            out.raw("\" class=\"footnote\" rel=\"footnote\">");
            out.text(name);
            out.raw("</a></sup>");
        }
        InlineToken::Escaped(b) | InlineToken::Literal(b) => out.text(&[b]),
        InlineToken::Toggle(marker) => {
            if toggles.toggle(marker) {
                out.raw(marker.open_tag());
            } else {
                out.raw(marker.close_tag());
            }
        }
    }
}
