use serde::{Deserialize, Serialize};

use crate::utils::sentence_divider::split_sentences;

/// Ordered piece of a request's text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    pub index: usize,
    pub text: String,
}

/// Split `text` into chunks of at most `limit` characters, breaking only after
/// sentence-ending punctuation.
///
/// Sentences are packed greedily; a single sentence longer than `limit` is
/// emitted as its own chunk. Joining the chunks in order yields `text`.
pub fn segment(text: &str, limit: usize) -> Vec<TextChunk> {
    if text.is_empty() {
        return Vec::new();
    }
    if text.chars().count() <= limit {
        return vec![TextChunk {
            index: 0,
            text: text.to_string(),
        }];
    }

    let mut pieces: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in split_sentences(text) {
        let sentence_len = sentence.chars().count();
        if current_len + sentence_len <= limit {
            current.push_str(sentence);
            current_len += sentence_len;
        } else {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
            current.push_str(sentence);
            current_len = sentence_len;
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(index, text)| TextChunk { index, text })
        .collect()
}
