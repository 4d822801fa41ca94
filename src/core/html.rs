// src/core/html.rs

// Single-pass scan helpers over raw page text. No DOM, no entity decoding;
// absent patterns yield None/empty.

/// All `attr="value"` occurrences in document order, values verbatim.
pub fn attr_values<'a>(doc: &'a str, attr: &str) -> Vec<&'a str> {
    let pat = format!("{attr}=\"");
    let mut out = Vec::new();
    let mut pos = 0usize;
    while let Some(rel) = doc[pos..].find(&pat) {
        let vstart = pos + rel + pat.len();
        match doc[vstart..].find('"') {
            Some(vlen) => {
                out.push(&doc[vstart..vstart + vlen]);
                pos = vstart + vlen + 1;
            }
            // Unterminated attribute; drop the tail
            None => break,
        }
    }
    out
}

/// First `attr="value"` whose value starts with `prefix` and ends with `suffix`.
pub fn first_attr_value_with<'a>(
    doc: &'a str,
    attr: &str,
    prefix: &str,
    suffix: &str,
) -> Option<&'a str> {
    attr_values(doc, attr)
        .into_iter()
        .find(|v| v.starts_with(prefix) && v.ends_with(suffix))
}

/// Index just past the `>` of the open tag starting at `start` (an index
/// of `<`). None if the tag never closes or another `<` begins first.
pub fn open_tag_end(doc: &str, start: usize) -> Option<usize> {
    let rest = &doc[start + 1..];
    for (i, ch) in rest.char_indices() {
        match ch {
            '>' => return Some(start + 1 + i + 1),
            '<' => return None,
            _ => {}
        }
    }
    None
}

/// Inner text of the first `<span ...>...</span>` at or after `from`.
pub fn next_span_text(doc: &str, from: usize) -> Option<&str> {
    let open = from + doc[from..].find("<span")?;
    let body_start = open_tag_end(doc, open)?;
    let close = body_start + doc[body_start..].find("</span>")?;
    Some(&doc[body_start..close])
}
