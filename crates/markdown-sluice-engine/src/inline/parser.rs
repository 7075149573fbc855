use super::{
    cursor::Cursor,
    kinds::{Escape, FootnoteRef, Image, Link, Marker, QuickLink, is_url_byte},
    types::InlineToken,
};

/// Scans the next token at the cursor and advances past it.
///
/// Returns `None` only at end of line. Constructs are tried in priority
/// order: quick link, link, image, footnote reference, escape, toggle
/// markers, and finally a single literal byte. A construct that fails to
/// match leaves the cursor untouched, so its opening byte falls through to
/// the literal case and scanning resumes one byte later.
pub fn next_token<'a>(cur: &mut Cursor<'a>) -> Option<InlineToken<'a>> {
    if cur.eof() {
        return None;
    }
    if let Some(token) = try_parse_quick_link(cur) {
        return Some(token);
    }
    if let Some(token) = try_parse_link(cur) {
        return Some(token);
    }
    if let Some(token) = try_parse_image(cur) {
        return Some(token);
    }
    if let Some(token) = try_parse_footnote_ref(cur) {
        return Some(token);
    }
    if let Some(b) = Escape::detect(&cur.s[cur.i..]) {
        cur.bump_n(2);
        return Some(InlineToken::Escaped(b));
    }
    if let Some(marker) = Marker::detect(&cur.s[cur.i..]) {
        cur.bump_n(marker.delimiter().len());
        return Some(InlineToken::Toggle(marker));
    }
    cur.bump().map(InlineToken::Literal)
}

/// Attempts to parse `<url>` at the current position.
///
/// The url may not contain whitespace; on failure the cursor is restored.
fn try_parse_quick_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineToken<'a>> {
    if cur.peek() != Some(QuickLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // <
    let url = cur.eat_while(|b| is_url_byte(b) && b != QuickLink::CLOSE);

    if cur.peek() != Some(QuickLink::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // >

    Some(InlineToken::QuickLink { url })
}

/// Attempts to parse `[text](url)`; on failure the cursor is restored.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<InlineToken<'a>> {
    let saved = cur.clone();
    match link_parts(cur) {
        Some((text, url)) => Some(InlineToken::Link { text, url }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `![alt](src)`; on failure the cursor is restored.
fn try_parse_image<'a>(cur: &mut Cursor<'a>) -> Option<InlineToken<'a>> {
    if cur.peek() != Some(Image::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // !
    match link_parts(cur) {
        Some((alt, src)) => Some(InlineToken::Image { alt, src }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Parses the shared `[text](url)` grammar of links and images.
///
/// Leaves the cursor wherever scanning stopped; callers restore it on `None`.
fn link_parts<'a>(cur: &mut Cursor<'a>) -> Option<(&'a [u8], &'a [u8])> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }
    cur.bump(); // [
    let text_start = cur.i;

    // The byte before the cursor is `[` on the first pass, so an empty text
    // still ends at the first `]`.
    loop {
        let b = cur.peek()?;
        if b == Link::TEXT_CLOSE && cur.s[cur.i - 1] != Link::TEXT_ESCAPE {
            break;
        }
        cur.bump();
    }
    let text = &cur.s[text_start..cur.i];
    if text.is_empty() {
        return None;
    }
    cur.bump(); // ]

    if cur.peek() != Some(Link::URL_OPEN) {
        return None;
    }
    cur.bump(); // (
    let url = cur.eat_while(|b| is_url_byte(b) && b != Link::URL_CLOSE);

    if cur.peek() != Some(Link::URL_CLOSE) {
        return None;
    }
    cur.bump(); // )

    Some((text, url))
}

/// Attempts to parse `[^digits]`; on failure the cursor is restored.
fn try_parse_footnote_ref<'a>(cur: &mut Cursor<'a>) -> Option<InlineToken<'a>> {
    if !cur.starts_with(FootnoteRef::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(FootnoteRef::OPEN.len());
    let digits = cur.eat_while(|b| b.is_ascii_digit());

    if cur.peek() != Some(FootnoteRef::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump(); // ]

    Some(InlineToken::FootnoteRef { digits })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(s: &str) -> Vec<InlineToken<'_>> {
        let mut cur = Cursor::new(s.as_bytes());
        std::iter::from_fn(|| next_token(&mut cur)).collect()
    }

    #[test]
    fn plain_text_is_literal_bytes() {
        assert_eq!(
            tokens("ab"),
            vec![InlineToken::Literal(b'a'), InlineToken::Literal(b'b')]
        );
    }

    #[test]
    fn parse_quick_link() {
        assert_eq!(
            tokens("<https://x.io>"),
            vec![InlineToken::QuickLink {
                url: b"https://x.io"
            }]
        );
    }

    #[test]
    fn quick_link_with_space_is_literal() {
        let toks = tokens("<a b>");
        assert_eq!(toks[0], InlineToken::Literal(b'<'));
        assert_eq!(toks.len(), 5);
    }

    #[test]
    fn parse_link() {
        assert_eq!(
            tokens("[home](/index.html)"),
            vec![InlineToken::Link {
                text: b"home",
                url: b"/index.html"
            }]
        );
    }

    #[test]
    fn link_text_keeps_escaped_bracket() {
        assert_eq!(
            tokens("[a\\]b](u)"),
            vec![InlineToken::Link {
                text: b"a\\]b",
                url: b"u"
            }]
        );
    }

    #[test]
    fn link_with_empty_url() {
        assert_eq!(
            tokens("[a]()"),
            vec![InlineToken::Link { text: b"a", url: b"" }]
        );
    }

    #[test]
    fn empty_link_text_is_not_a_link() {
        assert_eq!(tokens("[](u)")[0], InlineToken::Literal(b'['));
    }

    #[test]
    fn unclosed_link_falls_back_to_literal() {
        let toks = tokens("[never closed");
        assert_eq!(toks[0], InlineToken::Literal(b'['));
        assert_eq!(toks.len(), "[never closed".len());
    }

    #[test]
    fn link_url_with_space_is_not_a_link() {
        assert_eq!(tokens("[a](b c)")[0], InlineToken::Literal(b'['));
    }

    #[test]
    fn parse_image() {
        assert_eq!(
            tokens("![cat](cat.png)"),
            vec![InlineToken::Image {
                alt: b"cat",
                src: b"cat.png"
            }]
        );
    }

    #[test]
    fn bang_without_link_is_literal() {
        assert_eq!(
            tokens("!x"),
            vec![InlineToken::Literal(b'!'), InlineToken::Literal(b'x')]
        );
    }

    #[test]
    fn parse_footnote_ref() {
        assert_eq!(
            tokens("[^12]"),
            vec![InlineToken::FootnoteRef { digits: b"12" }]
        );
        assert_eq!(tokens("[^]"), vec![InlineToken::FootnoteRef { digits: b"" }]);
    }

    #[test]
    fn footnote_ref_with_letters_is_literal() {
        assert_eq!(tokens("[^ab]")[0], InlineToken::Literal(b'['));
    }

    #[test]
    fn link_beats_footnote_ref() {
        assert_eq!(
            tokens("[^1](u)"),
            vec![InlineToken::Link {
                text: b"^1",
                url: b"u"
            }]
        );
    }

    #[test]
    fn parse_escape_and_markers() {
        assert_eq!(
            tokens("\\***~~`"),
            vec![
                InlineToken::Escaped(b'*'),
                InlineToken::Toggle(Marker::Bold),
                InlineToken::Toggle(Marker::Strike),
                InlineToken::Toggle(Marker::Code),
            ]
        );
    }

    #[test]
    fn lone_backslash_is_literal() {
        assert_eq!(
            tokens("\\q"),
            vec![InlineToken::Literal(b'\\'), InlineToken::Literal(b'q')]
        );
    }
}
