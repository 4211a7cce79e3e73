/// Leading phrases that introduce a concept name in a free-text question
const QUERY_PREFIXES: &[&str] = &["explain ", "what is ", "define "];

/// Normalize free text into a catalogue key
/// (e.g., " Binary-Search / Tree " -> "binary_search_tree")
pub fn normalize_key(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    let mut key = String::with_capacity(lowered.len());
    for c in lowered.chars() {
        let c = if matches!(c, ' ' | '-' | '/') { '_' } else { c };
        // Collapse runs of underscores
        if c == '_' && key.ends_with('_') {
            continue;
        }
        key.push(c);
    }
    key
}

/// Strip a leading "explain " / "what is " / "define " (case-insensitive)
/// Returns the trimmed remainder, or the trimmed query when no prefix matches
pub fn strip_query_prefix(query: &str) -> &str {
    let query = query.trim();
    for prefix in QUERY_PREFIXES {
        if let Some(head) = query.get(..prefix.len()) {
            if head.eq_ignore_ascii_case(prefix) {
                return query[prefix.len()..].trim();
            }
        }
    }
    query
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// Char index of the first case-insensitive occurrence of `needle` in `text`
pub fn find_ignore_case(text: &[char], needle: &[char]) -> Option<usize> {
    if needle.is_empty() || needle.len() > text.len() {
        return None;
    }
    (0..=text.len() - needle.len()).find(|&start| {
        needle
            .iter()
            .zip(&text[start..])
            .all(|(n, t)| chars_eq_ignore_case(*n, *t))
    })
}

/// Excerpt of `text` centered on the first occurrence of `query`,
/// keeping `window` characters on each side and marking cuts with "..."
pub fn snippet(text: &str, query: &str, window: usize) -> String {
    if text.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = text.chars().collect();
    let needle: Vec<char> = query.chars().collect();

    let (start, end) = match find_ignore_case(&chars, &needle) {
        Some(idx) => (
            idx.saturating_sub(window),
            (idx + needle.len() + window).min(chars.len()),
        ),
        // Match was in the name only: lead with the opening of the text
        None => (0, (window * 2).min(chars.len())),
    };

    let mut out: String = chars[start..end].iter().collect();
    if start > 0 {
        out.insert_str(0, "...");
    }
    if end < chars.len() {
        out.push_str("...");
    }
    out
}

/// Greedy word wrap at `width` columns; words longer than a line are split
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in text.split_whitespace() {
        let mut word = word;
        let mut word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        // line is empty here whenever the word cannot fit on one line
        while word_len > width {
            let cut = word
                .char_indices()
                .nth(width)
                .map_or(word.len(), |(i, _)| i);
            lines.push(word[..cut].to_string());
            word = &word[cut..];
            word_len -= width;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}
