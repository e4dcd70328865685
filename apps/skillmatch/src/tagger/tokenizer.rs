//! Word tokenizer with sentence tracking.
//!
//! Word tokens may carry inner `.`, `/`, `-` and trailing `+`/`#`, so that
//! `node.js`, `ci/cd`, `c++` and `c#` survive as single tokens.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::pos::PosTag;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}][\p{L}\p{N}+#]*(?:[./\-'][\p{L}\p{N}][\p{L}\p{N}+#]*)*")
        .expect("word regex is valid")
});

/// A word token with its sentence position and part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Surface form as it appeared in the text.
    pub text: String,
    pub lower: String,
    pub pos: PosTag,
    pub sentence_idx: usize,
    /// Position of the token within its sentence.
    pub word_idx: usize,
}

impl Token {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_sentence_start(&self) -> bool {
        self.word_idx == 0
    }
}

/// Splits `text` into word tokens. Tags are left as `PosTag::Other`; the
/// tagger fills them in.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut sentence_idx = 0;
    let mut word_idx = 0;
    let mut prev_end = 0;

    for m in WORD_RE.find_iter(text) {
        if !tokens.is_empty() && ends_sentence(&text[prev_end..m.start()]) {
            sentence_idx += 1;
            word_idx = 0;
        }

        tokens.push(Token {
            text: m.as_str().to_string(),
            lower: m.as_str().to_lowercase(),
            pos: PosTag::Other,
            sentence_idx,
            word_idx,
        });

        word_idx += 1;
        prev_end = m.end();
    }

    tokens
}

fn ends_sentence(gap: &str) -> bool {
    gap.chars()
        .any(|c| matches!(c, '.' | '!' | '?' | '\n' | '•' | '\u{25aa}' | ';'))
}
