/// Decode resume bytes, keeping every valid UTF-8 run and dropping the rest.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

// LF, CR, VT, FF, the ASCII separators, NEL and the Unicode line/paragraph separators. CRLF counts once.
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// One entry per source line, trailing whitespace trimmed. A terminator at
/// the very end does not add an empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(pos) = rest.find(LINE_BREAKS) else {
            lines.push(rest.trim_end().to_string());
            break;
        };
        lines.push(rest[..pos].trim_end().to_string());
        let tail = &rest[pos..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    lines
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
