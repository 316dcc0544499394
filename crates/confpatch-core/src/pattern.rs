//! Structural scanner for `const <identifier> = { ... };` declarations.
//!
//! The body is walked with brace-depth counting rather than a single-level
//! pattern, so declarations containing nested object literals are matched in
//! full. Brace characters inside string literals are not interpreted; a `}`
//! in a quoted value ends the walk early.

/// Byte range of a matched declaration within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Finds the first declaration of `identifier` in `text`.
///
/// A declaration is `const <identifier> = { ... };` with the trailing
/// semicolon required (horizontal whitespace between `}` and `;` is
/// tolerated). Returns the span covering the whole declaration, semicolon
/// included, or `None`.
pub fn find_declaration(text: &str, identifier: &str) -> Option<Span> {
    let bytes = text.as_bytes();
    let mut from = 0;

    while let Some(rel) = text[from..].find("const") {
        let kw_start = from + rel;
        from = kw_start + 5;

        if !boundary_before(bytes, kw_start) {
            continue;
        }

        // `const` must be followed by whitespace, then the exact identifier.
        let mut pos = kw_start + 5;
        let after_ws = skip_whitespace(bytes, pos);
        if after_ws == pos {
            continue;
        }
        pos = after_ws;

        if !text[pos..].starts_with(identifier) {
            continue;
        }
        pos += identifier.len();
        if is_ident_byte(bytes.get(pos).copied()) {
            continue;
        }

        pos = skip_whitespace(bytes, pos);
        if bytes.get(pos) != Some(&b'=') {
            continue;
        }
        pos = skip_whitespace(bytes, pos + 1);
        if bytes.get(pos) != Some(&b'{') {
            continue;
        }

        if let Some(end) = scan_body(bytes, pos) {
            return Some(Span { start: kw_start, end });
        }
    }

    None
}

/// Walks the balanced-brace body starting at the `{` at `open` and returns
/// the offset just past the trailing `;`, or `None` for an unterminated or
/// semicolon-less declaration.
fn scan_body(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut pos = open;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let mut tail = pos + 1;
                    while matches!(bytes.get(tail), Some(&b' ') | Some(&b'\t')) {
                        tail += 1;
                    }
                    if bytes.get(tail) == Some(&b';') {
                        return Some(tail + 1);
                    }
                    return None;
                }
            }
            _ => {}
        }
        pos += 1;
    }

    None
}

fn boundary_before(bytes: &[u8], pos: usize) -> bool {
    pos == 0 || !is_ident_byte(Some(bytes[pos - 1]))
}

fn is_ident_byte(b: Option<u8>) -> bool {
    matches!(b, Some(c) if c.is_ascii_alphanumeric() || c == b'_' || c == b'$')
}

fn skip_whitespace(bytes: &[u8], mut pos: usize) -> usize {
    while matches!(bytes.get(pos), Some(c) if c.is_ascii_whitespace()) {
        pos += 1;
    }
    pos
}
