//! Word-boundary text chunking
//!
//! Long content is split into chunks packed greedily at word boundaries and
//! re-joined with blank lines, so downstream consumers never see a chunk
//! that was cut mid-word.

/// Default maximum chunk length in bytes
pub const DEFAULT_MAX_LENGTH: usize = 5000;

/// Splits text into word-boundary chunks joined with `\n\n`
///
/// Text at or under `max_length` is returned unchanged. Otherwise words are
/// packed into a buffer while the buffer plus a separating space stays
/// within `max_length`; when the next word would overflow, the buffer is
/// flushed as a chunk and the word starts the next one. A single word
/// longer than `max_length` is flushed alone, never truncated, so no word
/// is ever dropped.
pub fn split_text_on_words(text: &str, max_length: usize) -> String {
    if text.len() <= max_length {
        return text.to_string();
    }

    let mut chunks: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_length {
            if current.is_empty() {
                // Oversized single word, flush it alone
                chunks.push(word.to_string());
            } else {
                chunks.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks.join("\n\n")
}
