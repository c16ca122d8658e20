//! Paragraph-boundary text chunker.
//!
//! Splits extracted document text into passages on blank lines (`\n\n`),
//! which is how retrieved context is delimited everywhere else in Rigor.
//! Paragraphs longer than `max_chars` are hard-split at whitespace
//! boundaries so a single wall of text cannot swallow the whole audit.

/// Split text into chunks on paragraph boundaries, respecting max_chars.
/// Empty and whitespace-only paragraphs are dropped; order is preserved.
///
/// `max_chars` caps chunk size in bytes. Splits always land on UTF-8
/// character boundaries, so a single character wider than the cap is kept
/// whole rather than torn apart.
pub fn split_paragraphs(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();

    for para in text.split("\n\n") {
        let trimmed = para.trim();
        if trimmed.is_empty() {
            continue;
        }

        if trimmed.len() <= max_chars {
            chunks.push(trimmed.to_string());
            continue;
        }

        // Hard split, preferring a newline or space boundary.
        let mut remaining = trimmed;
        while !remaining.is_empty() {
            let mut split_at = floor_char_boundary(remaining, remaining.len().min(max_chars));
            if split_at == 0 {
                // The cap is narrower than the first character; take that
                // character whole so the loop always advances.
                split_at = remaining
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(remaining.len());
            }
            let actual_split = if split_at < remaining.len() {
                remaining[..split_at]
                    .rfind('\n')
                    .or_else(|| remaining[..split_at].rfind(' '))
                    .map(|pos| pos + 1)
                    .unwrap_or(split_at)
            } else {
                split_at
            };
            let piece = remaining[..actual_split].trim();
            if !piece.is_empty() {
                chunks.push(piece.to_string());
            }
            remaining = &remaining[actual_split..];
        }
    }

    chunks
}

/// Largest index `<= at` that lands on a UTF-8 character boundary.
fn floor_char_boundary(s: &str, at: usize) -> usize {
    let mut idx = at;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}
