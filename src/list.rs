//! Canonical list-of-strings representation.
//!
//! A list is a whitespace-separated sequence of elements; an element is
//! either brace-quoted (taken literally) or bare (a run of non-whitespace).
//! [`format_list`] always produces something [`parse_list`] re-parses back
//! to the same elements — the round-trip the built-in `list`/`lindex`/
//! `lrange`/`split` commands all rely on.

/// Split a list-formatted string into its elements.
///
/// Whitespace outside of `{...}` separates elements; braces nest and are
/// stripped from the element's value. Unbalanced trailing braces are
/// tolerated by taking whatever is left as the final element, matching the
/// tokenizer's own leniency on malformed input (the parser never signals a
/// parse error — see the evaluator's error-handling design).
pub fn parse_list(s: &str) -> Vec<String> {
    let bytes = s.as_bytes();
    let mut i = 0;
    let mut out = Vec::new();
    while i < bytes.len() {
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        if bytes[i] == b'{' {
            let mut level = 1i32;
            let start = i + 1;
            let mut j = start;
            while j < bytes.len() && level > 0 {
                match bytes[j] {
                    b'{' => level += 1,
                    b'}' => level -= 1,
                    _ => {}
                }
                if level > 0 {
                    j += 1;
                }
            }
            out.push(String::from_utf8_lossy(&bytes[start..j]).into_owned());
            i = if j < bytes.len() { j + 1 } else { j };
        } else {
            let start = i;
            while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            out.push(String::from_utf8_lossy(&bytes[start..i]).into_owned());
        }
    }
    out
}

/// Render one element, wrapping in `{...}` when required for a round trip:
/// the element is empty, or contains whitespace or a brace.
pub fn format_element(elem: &str) -> String {
    let needs_braces = elem.is_empty()
        || elem.bytes().any(|b| b.is_ascii_whitespace() || b == b'{' || b == b'}');
    if needs_braces {
        format!("{{{}}}", elem)
    } else {
        elem.to_string()
    }
}

/// Render a full list: each element formatted by [`format_element`],
/// separated by a single space.
pub fn format_list<I: IntoIterator<Item = S>, S: AsRef<str>>(elems: I) -> String {
    elems
        .into_iter()
        .map(|e| format_element(e.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
