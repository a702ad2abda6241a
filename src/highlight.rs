//! Word tokenizer and display-run builder.
//!
//! A line is split into tokens: maximal runs of word characters, single
//! punctuation characters from a small fixed set, maximal whitespace
//! runs, and single characters outside all three classes. Each token's
//! color is resolved by exact-text lookup in a [`ColorConfig`], then
//! adjacent tokens with equal resolved colors are concatenated into
//! display runs so the renderer draws as few text runs as possible.
//!
//! Tokenization is a pure function of the line text and the config. It
//! is rerun for each line on every render pass and keeps no state.

use crate::theme::{ColorConfig, ColorPair};

/// Character classes for tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Alphanumeric characters and underscore
    Word,
    /// One of `.` `[` `]` `{` `}` `(` `)`
    Punctuation,
    /// Whitespace characters
    Whitespace,
    /// Everything else
    Other,
}

/// Classifies a character for tokenization.
pub fn char_class(ch: char) -> CharClass {
    if ch.is_whitespace() {
        CharClass::Whitespace
    } else if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else if matches!(ch, '.' | '[' | ']' | '{' | '}' | '(' | ')') {
        CharClass::Punctuation
    } else {
        CharClass::Other
    }
}

/// A token produced by [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub class: CharClass,
}

/// A run of text with one resolved color, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    pub color: ColorPair,
}

/// Splits a line into tokens.
///
/// Word and whitespace characters group into maximal runs; punctuation
/// and unclassified characters each stand alone. Every input character
/// appears in exactly one token, in order.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        let class = char_class(ch);
        let mut token = String::from(ch);
        if matches!(class, CharClass::Word | CharClass::Whitespace) {
            while let Some(&next) = chars.peek() {
                if char_class(next) != class {
                    break;
                }
                token.push(next);
                chars.next();
            }
        }
        tokens.push(Token { text: token, class });
    }
    tokens
}

/// Tokenizes a line and merges adjacent same-colored tokens into runs.
///
/// Colors are compared by value, so tokens resolving to the default pair
/// merge with each other regardless of class.
pub fn display_runs(text: &str, config: &ColorConfig) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for token in tokenize(text) {
        let color = config.pair_for(&token.text);
        match runs.last_mut() {
            Some(last) if last.color == color => last.text.push_str(&token.text),
            _ => runs.push(Run {
                text: token.text,
                color,
            }),
        }
    }
    runs
}
