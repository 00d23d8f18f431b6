//! Packing a list of album identifiers into one form field and back.
//!
//! Identifiers are joined with `,`. A literal `,` or `\` inside an
//! identifier is escaped with a backslash. The one-element list `[""]`
//! packs to a lone `\` so it stays distinct from the empty list.

const SEPARATOR: char = ',';
const ESCAPE: char = '\\';

/// Join identifiers into a single string.
pub fn join<S: AsRef<str>>(ids: &[S]) -> String {
    if let [only] = ids {
        if only.as_ref().is_empty() {
            return ESCAPE.to_string();
        }
    }

    let mut out = String::new();
    for (i, id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(SEPARATOR);
        }
        for c in id.as_ref().chars() {
            if c == SEPARATOR || c == ESCAPE {
                out.push(ESCAPE);
            }
            out.push(c);
        }
    }
    out
}

/// Split a string produced by [`join`] back into identifiers.
pub fn parse(packed: &str) -> Vec<String> {
    if packed.is_empty() {
        return Vec::new();
    }

    let mut ids = Vec::new();
    let mut current = String::new();
    let mut chars = packed.chars();
    while let Some(c) = chars.next() {
        match c {
            // a trailing escape marks the end of an empty id
            ESCAPE => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            SEPARATOR => ids.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    ids.push(current);
    ids
}
