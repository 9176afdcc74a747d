//! Linguistic analysis — tokenization, part-of-speech tagging, lemmatization
//!
//! The normalizer only depends on the [`Analyzer`] trait, so any tagger
//! (or a test double) can stand in for the built-in [`RuleTagger`].
//!
//! # Model lifecycle
//!
//! A tagger owns its [`Lexicon`] and never mutates it after construction.
//! Build one at startup and share it by reference across threads; no
//! locking is needed.

pub mod lexicon;
pub mod tagger;
pub mod tokenizer;

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

pub use lexicon::Lexicon;
pub use tagger::RuleTagger;

/// Universal part-of-speech tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PartOfSpeech {
    #[serde(rename = "NOUN")]
    Noun,
    #[serde(rename = "PROPN")]
    ProperNoun,
    #[serde(rename = "VERB")]
    Verb,
    #[serde(rename = "AUX")]
    Auxiliary,
    #[serde(rename = "ADJ")]
    Adjective,
    #[serde(rename = "ADV")]
    Adverb,
    #[serde(rename = "PRON")]
    Pronoun,
    #[serde(rename = "DET")]
    Determiner,
    #[serde(rename = "ADP")]
    Adposition,
    #[serde(rename = "CCONJ")]
    Conjunction,
    #[serde(rename = "NUM")]
    Numeral,
    #[serde(rename = "PART")]
    Particle,
    #[serde(rename = "X")]
    Other,
}

impl PartOfSpeech {
    /// The universal tag name (`NOUN`, `PROPN`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::ProperNoun => "PROPN",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Auxiliary => "AUX",
            PartOfSpeech::Adjective => "ADJ",
            PartOfSpeech::Adverb => "ADV",
            PartOfSpeech::Pronoun => "PRON",
            PartOfSpeech::Determiner => "DET",
            PartOfSpeech::Adposition => "ADP",
            PartOfSpeech::Conjunction => "CCONJ",
            PartOfSpeech::Numeral => "NUM",
            PartOfSpeech::Particle => "PART",
            PartOfSpeech::Other => "X",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One analyzed word: surface text, base form and tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyzedToken {
    pub text: String,
    pub lemma: String,
    pub pos: PartOfSpeech,
}

/// Linguistic analysis capability consumed by the normalizer
///
/// Implementations must be deterministic: the same text always yields the
/// same tokens, in input order.
pub trait Analyzer: Send + Sync {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken>;
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        (**self).analyze(text)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        (**self).analyze(text)
    }
}

/// Process-wide tagger over the built-in English lexicon, built on first use
pub fn english() -> &'static RuleTagger {
    static ENGLISH: OnceLock<RuleTagger> = OnceLock::new();
    ENGLISH.get_or_init(RuleTagger::english)
}
