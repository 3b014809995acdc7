/// Splits `text` into contiguous fragments of roughly `max_len` bytes,
/// cutting only after newlines.
///
/// Each cut lands right after the last `\n` within the next `max_len` bytes.
/// When that window holds no newline the fragment runs on to the next `\n`
/// past the window, or to the end of the text, so `max_len` is a target
/// rather than a ceiling: a single long line is never broken.
///
/// Fragments are never empty and concatenate back to `text`. Empty input
/// yields no fragments.
pub fn split_by_newline(text: &str, max_len: usize) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut fragments = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        let window_end = start.saturating_add(max_len);
        if window_end >= bytes.len() {
            fragments.push(&text[start..]);
            break;
        }

        let cut = match last_newline(&bytes[start..window_end]) {
            Some(i) => start + i + 1,
            None => match next_newline(&bytes[window_end..]) {
                Some(i) => window_end + i + 1,
                None => bytes.len(),
            },
        };

        fragments.push(&text[start..cut]);
        start = cut;
    }

    fragments
}

fn last_newline(bytes: &[u8]) -> Option<usize> {
    bytes.iter().rposition(|&b| b == b'\n')
}

fn next_newline(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| b == b'\n')
}
