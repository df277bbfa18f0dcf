/// Splits `s` at `separator` characters that are not nested inside
/// `<>`, `[]` or `()`. Segments are returned untrimmed.
pub fn split_top_level(s: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth: usize = 0;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' | '[' | '(' => depth += 1,
            '>' | ']' | ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Last path segment of a `.`, `/` or `::` separated name.
pub fn extract_last_segment(path: &str) -> &str {
    path.rsplit(['/', '.', ':']).next().unwrap_or(path)
}

/// Everything before the last path segment, or `None` for a bare name.
pub fn namespace_of(path: &str) -> Option<&str> {
    let last = extract_last_segment(path);
    let prefix = &path[..path.len() - last.len()];
    let prefix = prefix.trim_end_matches(['/', '.', ':']);
    if prefix.is_empty() {
        None
    } else {
        Some(prefix)
    }
}
