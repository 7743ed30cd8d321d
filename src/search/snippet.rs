//! Bounded context snippets around a match within one line.

/// Extract a window of at most `max_chars` characters centered on the first
/// occurrence of `needle` in `line`.
///
/// The window is marked with `"..."` on each side that does not reach the
/// line's edge. When the needle is absent (the caller normally guarantees a
/// match), the line is truncated to `max_chars` with a trailing ellipsis.
/// Window arithmetic is in characters, so multi-byte text is never split.
pub fn build_snippet(line: &str, needle: &str, max_chars: usize) -> String {
    let Some(match_byte) = line.find(needle) else {
        return if line.chars().count() <= max_chars {
            line.to_string()
        } else {
            let truncated: String = line.chars().take(max_chars).collect();
            truncated + "..."
        };
    };

    let match_char = line[..match_byte].chars().count();
    let line_chars = line.chars().count();

    let start = match_char.saturating_sub(max_chars / 2);
    let end = line_chars.min(start + max_chars);

    let window: String = line.chars().skip(start).take(end - start).collect();

    let mut snippet = String::with_capacity(window.len() + 6);
    if start > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&window);
    if end < line_chars {
        snippet.push_str("...");
    }
    snippet
}
