//! Lexical normalizer — reduces a product phrase to one representative word
//!
//! The representative word is the lowercase lemma of the phrase's first
//! common noun. Nouns carry "what kind of product this is" in short
//! marketing phrases (`fast wireless charger` → `charger`). The first noun
//! wins even when it is not the syntactic head; no parse is attempted.
//!
//! # Pipeline
//!
//! `phrase → trim → Analyzer::analyze → first NOUN lemma → lowercase`
//!
//! Fallbacks, in order:
//! 1. no noun: lemma of the first token
//! 2. no tokens at all (punctuation only): the trimmed phrase itself,
//!    lowercased, with whitespace removed
//!
//! # Guarantees
//!
//! - **Deterministic**: same phrase and analyzer always give the same word
//! - **Single word**: output is lowercase and never contains whitespace
//! - **Pure**: no state is read or written besides the analyzer's lexicon

use crate::analyzer::{self, AnalyzedToken, Analyzer, PartOfSpeech};
use crate::{Error, Result};

// ── Public API ─────────────────────────────────────────────

/// Normalize a phrase with the built-in English analyzer
///
/// # Errors
/// Returns `InvalidInput` if the phrase is empty or whitespace-only.
pub fn normalize(phrase: &str) -> Result<String> {
    normalize_with(analyzer::english(), phrase)
}

/// Normalize a phrase with an injected analyzer
///
/// # Errors
/// Returns `InvalidInput` if the phrase is empty or whitespace-only.
pub fn normalize_with(analyzer: &dyn Analyzer, phrase: &str) -> Result<String> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput(
            "product type phrase is empty".to_string(),
        ));
    }

    let tokens = analyzer.analyze(trimmed);
    let word = match representative(&tokens) {
        Some(token) => single_word(&token.lemma),
        None => single_word(trimmed),
    };

    tracing::debug!(phrase = trimmed, tokens = tokens.len(), word = %word, "normalized phrase");
    Ok(word)
}

/// Normalizer bound to one analyzer instance
///
/// ```
/// use formgen_core::analyzer::RuleTagger;
/// use formgen_core::Normalizer;
///
/// let normalizer = Normalizer::new(RuleTagger::english());
/// assert_eq!(normalizer.normalize("fast wireless charger").unwrap(), "charger");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<A> {
    analyzer: A,
}

impl<A: Analyzer> Normalizer<A> {
    pub fn new(analyzer: A) -> Self {
        Normalizer { analyzer }
    }

    /// See [`normalize_with`]
    pub fn normalize(&self, phrase: &str) -> Result<String> {
        normalize_with(&self.analyzer, phrase)
    }
}

// ── Selection ──────────────────────────────────────────────

/// First common noun, else the first token
fn representative(tokens: &[AnalyzedToken]) -> Option<&AnalyzedToken> {
    tokens
        .iter()
        .find(|t| t.pos == PartOfSpeech::Noun)
        .or_else(|| tokens.first())
}

fn single_word(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
