//! Word tokenizer — splits a product phrase into words
//!
//! Handles: alphabetic words, numbers (with `.`/`,` between digits),
//! digit/letter mixes (`64gb`, `usb3`), internal hyphens and apostrophes
//! (`t-shirt`, `o'neill`) and the possessive `'s`, which becomes its own word.
//! Punctuation and symbols are discarded, so a phrase made only of
//! punctuation yields no words at all.
//!
//! Input is NFKC-folded first so full-width and compatibility forms
//! tokenize like their plain counterparts.

use unicode_normalization::UnicodeNormalization;

/// Coarse shape of a word, decided by its characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// Letters only (hyphens and apostrophes allowed inside)
    Alphabetic,
    /// Digits only (decimal separators allowed between digits)
    Numeric,
    /// Letters and digits mixed
    Alphanumeric,
    /// The possessive clitic `'s`
    Possessive,
}

/// A word with its character offset in the folded input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub text: String,
    pub kind: WordKind,
    pub offset: usize,
}

/// Tokenizer for product phrases
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    /// Create a new tokenizer for the given text
    pub fn new(text: &str) -> Self {
        Tokenizer {
            input: text.nfkc().collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input into words, in order
    pub fn tokenize(&mut self) -> Vec<Word> {
        let mut words = Vec::new();

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                words.push(self.read_word());
            } else if is_apostrophe(ch) && self.possessive_ahead() {
                words.push(self.read_possessive());
            } else {
                self.advance();
            }
        }

        words
    }

    // ── Character helpers ──────────────────────────────────

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn previous(&self) -> Option<char> {
        self.position
            .checked_sub(1)
            .and_then(|i| self.input.get(i).copied())
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek();
        if ch.is_some() {
            self.position += 1;
        }
        ch
    }

    /// `'s` directly after a word and followed by a word boundary
    fn possessive_ahead(&self) -> bool {
        self.previous().is_some_and(char::is_alphanumeric)
            && matches!(self.peek_ahead(1), Some('s') | Some('S'))
            && !self.peek_ahead(2).is_some_and(char::is_alphanumeric)
    }

    // ── Words ──────────────────────────────────────────────

    fn read_word(&mut self) -> Word {
        let start = self.position;

        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() {
                self.advance();
                continue;
            }

            let next = self.peek_ahead(1);
            let joins = match ch {
                '-' => next.is_some_and(char::is_alphanumeric),
                '.' | ',' => {
                    self.previous().is_some_and(|c| c.is_ascii_digit())
                        && next.is_some_and(|c| c.is_ascii_digit())
                }
                c if is_apostrophe(c) => {
                    next.is_some_and(char::is_alphabetic) && !self.possessive_ahead()
                }
                _ => false,
            };

            if !joins {
                break;
            }
            self.advance();
        }

        let text: String = self.input[start..self.position].iter().collect();
        let kind = classify(&text);
        Word {
            text,
            kind,
            offset: start,
        }
    }

    fn read_possessive(&mut self) -> Word {
        let start = self.position;
        self.advance(); // apostrophe
        self.advance(); // s
        Word {
            text: "'s".to_string(),
            kind: WordKind::Possessive,
            offset: start,
        }
    }
}

fn is_apostrophe(ch: char) -> bool {
    ch == '\'' || ch == '\u{2019}'
}

fn classify(text: &str) -> WordKind {
    let has_alpha = text.chars().any(char::is_alphabetic);
    let has_digit = text.chars().any(|c| c.is_numeric());
    match (has_alpha, has_digit) {
        (true, true) => WordKind::Alphanumeric,
        (false, true) => WordKind::Numeric,
        _ => WordKind::Alphabetic,
    }
}

/// Convenience wrapper: tokenize `text` in one call
pub fn tokenize(text: &str) -> Vec<Word> {
    Tokenizer::new(text).tokenize()
}
