//! Reply chunking for Telegram's message size limit.

/// Split text into chunks of at most `max_length` characters, preferring to
/// break at newlines.
pub fn chunk_message(text: &str, max_length: usize) -> Vec<String> {
    if max_length == 0 {
        return vec![String::new()];
    }

    if text.chars().count() <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current_chunk = String::new();

    for line in text.split('\n') {
        // Check if adding this line (plus newline) would exceed limit
        let line_len = line.chars().count();
        let current_len = current_chunk.chars().count();
        let would_be = if current_chunk.is_empty() {
            line_len
        } else {
            current_len + 1 + line_len // +1 for newline
        };

        if would_be <= max_length {
            // Fits in current chunk
            if !current_chunk.is_empty() {
                current_chunk.push('\n');
            }
            current_chunk.push_str(line);
        } else if line_len > max_length {
            // Line itself is too long, need to split it
            if !current_chunk.is_empty() {
                chunks.push(std::mem::take(&mut current_chunk));
            }
            let line_chars: Vec<char> = line.chars().collect();
            let mut start = 0;
            while start < line_chars.len() {
                let end = (start + max_length).min(line_chars.len());
                let chunk: String = line_chars[start..end].iter().collect();
                if start + max_length >= line_chars.len() {
                    // Last piece of this line, start new chunk with it
                    current_chunk = chunk;
                } else {
                    chunks.push(chunk);
                }
                start = end;
            }
        } else {
            // Line doesn't fit, start new chunk
            if !current_chunk.is_empty() {
                chunks.push(std::mem::take(&mut current_chunk));
            }
            current_chunk = line.to_string();
        }
    }

    // Don't forget the last chunk
    if !current_chunk.is_empty() {
        chunks.push(current_chunk);
    }

    chunks
}

/// Chunk a reply for sending, dropping whitespace-only chunks.
pub fn format_reply(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![];
    }
    chunk_message(text, 4000)
        .into_iter()
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}
