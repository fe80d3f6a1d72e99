//! Search query sanitizing
//!
//! Free text typed by the user is escaped for the search backend's query
//! syntax and then percent-encoded so it can travel as a path or query
//! component.

/// Characters with a meaning in the search backend's query syntax
const RESERVED: &[char] = &[
    '+', '-', '=', '&', '|', '>', '<', '!', '(', ')', '{', '}', '[', ']', '^', '"', '~', '*',
    '?', ':', '\\', '/', '#',
];

/// Prefix every reserved character with a backslash
pub fn escape_reserved(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if RESERVED.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Remove the backslashes added by [`escape_reserved`]
pub fn unescape_reserved(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            if let Some(next) = chars.peek().copied() {
                if RESERVED.contains(&next) {
                    plain.push(next);
                    chars.next();
                    continue;
                }
            }
        }
        plain.push(ch);
    }
    plain
}

/// Escape then percent-encode a raw search term
pub fn encode_search_query(raw: &str) -> String {
    urlencoding::encode(&escape_reserved(raw)).into_owned()
}
