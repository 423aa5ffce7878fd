/// Sentence-ending punctuation, half-width and full-width
pub const SENTENCE_TERMINALS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

pub fn is_sentence_terminal(ch: char) -> bool {
    SENTENCE_TERMINALS.contains(&ch)
}

/// Split text into sentences, keeping each terminal attached to the sentence
/// before it. Whitespace is preserved, so joining the pieces yields `text`.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if is_sentence_terminal(ch) {
            let end = idx + ch.len_utf8();
            sentences.push(&text[start..end]);
            start = end;
        }
    }

    // Trailing fragment without punctuation
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
}
