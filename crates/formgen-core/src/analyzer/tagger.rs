//! Rule-based part-of-speech tagger and lemmatizer
//!
//! Tags each word independently (casing is ignored: product phrases are
//! title-cased, so capitals carry no signal). The first matching rule wins:
//!
//! 1. Word shape: possessive, numbers, digit/letter mixes
//! 2. Closed classes from the lexicon
//! 3. Known nouns, including irregular and regular plurals of them
//! 4. Known proper nouns
//! 5. Known adjectives and their comparative/superlative forms
//! 6. Known verbs and irregular verb forms
//! 7. Hyphenated compounds: a modifier when another word follows,
//!    otherwise tagged by their last segment
//! 8. Suffix heuristics (`-less`, `-ous`, `-ly`, `-ing`, `-ed`, ...)
//! 9. Anything else is a common noun

use super::lexicon::Lexicon;
use super::tokenizer::{tokenize, Word, WordKind};
use super::{AnalyzedToken, Analyzer, PartOfSpeech};

/// Suffix → minimum word length (in chars) for the adjective heuristic
const ADJECTIVE_SUFFIXES: &[(&str, usize)] = &[
    ("less", 6),
    ("ful", 6),
    ("ous", 6),
    ("ive", 6),
    ("able", 6),
    ("ible", 6),
    ("ical", 6),
    ("ic", 5),
    ("ish", 6),
    ("proof", 7),
];

/// Tagger driven entirely by a [`Lexicon`]
#[derive(Debug, Clone)]
pub struct RuleTagger {
    lexicon: Lexicon,
}

impl RuleTagger {
    pub fn new(lexicon: Lexicon) -> Self {
        RuleTagger { lexicon }
    }

    /// Tagger over the built-in English lexicon
    pub fn english() -> Self {
        Self::new(Lexicon::english())
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    fn tag_word(&self, word: &Word, followed: bool) -> (PartOfSpeech, String) {
        let lower = word.text.to_lowercase();
        match word.kind {
            WordKind::Possessive => (PartOfSpeech::Particle, lower),
            WordKind::Numeric => (PartOfSpeech::Numeral, lower),
            WordKind::Alphanumeric => {
                if lower.starts_with(|c: char| c.is_numeric()) {
                    (PartOfSpeech::Numeral, lower)
                } else {
                    (PartOfSpeech::ProperNoun, lower)
                }
            }
            WordKind::Alphabetic => self.tag_alphabetic(&lower, followed),
        }
    }

    fn tag_alphabetic(&self, w: &str, followed: bool) -> (PartOfSpeech, String) {
        if let Some(tagged) = self.lookup(w) {
            return tagged;
        }

        if let Some((prefix, head)) = w.rsplit_once('-') {
            if followed {
                return (PartOfSpeech::Adjective, w.to_string());
            }
            let (pos, lemma) = self.tag_alphabetic(head, false);
            return (pos, format!("{}-{}", prefix, lemma));
        }

        self.by_suffix(w)
    }

    // ── Lexicon lookups ────────────────────────────────────

    fn lookup(&self, w: &str) -> Option<(PartOfSpeech, String)> {
        let lex = &self.lexicon;
        let closed = [
            (&lex.determiners, PartOfSpeech::Determiner),
            (&lex.pronouns, PartOfSpeech::Pronoun),
            (&lex.adpositions, PartOfSpeech::Adposition),
            (&lex.conjunctions, PartOfSpeech::Conjunction),
            (&lex.adverbs, PartOfSpeech::Adverb),
            (&lex.particles, PartOfSpeech::Particle),
            (&lex.numerals, PartOfSpeech::Numeral),
        ];
        for (words, pos) in closed {
            if words.contains(w) {
                return Some((pos, w.to_string()));
            }
        }
        if let Some(lemma) = lex.auxiliaries.get(w) {
            return Some((PartOfSpeech::Auxiliary, lemma.clone()));
        }

        if let Some(singular) = lex.irregular_plurals.get(w) {
            return Some((PartOfSpeech::Noun, singular.clone()));
        }
        if lex.uninflected.contains(w) || lex.nouns.contains(w) {
            return Some((PartOfSpeech::Noun, w.to_string()));
        }
        let singular = self.singularize(w);
        if singular != w && lex.nouns.contains(&singular) {
            return Some((PartOfSpeech::Noun, singular));
        }

        if lex.proper_nouns.contains(w) {
            return Some((PartOfSpeech::ProperNoun, w.to_string()));
        }

        if let Some(base) = self.adjective_lemma(w) {
            return Some((PartOfSpeech::Adjective, base));
        }

        if lex.irregular_verbs.contains_key(w) || lex.verbs.contains(w) {
            return Some((PartOfSpeech::Verb, self.verb_lemma(w)));
        }
        if w.ends_with('s') {
            let base = self.verb_lemma(w);
            if lex.verbs.contains(&base) {
                return Some((PartOfSpeech::Verb, base));
            }
        }

        None
    }

    fn by_suffix(&self, w: &str) -> (PartOfSpeech, String) {
        let len = w.chars().count();

        for (suffix, min_len) in ADJECTIVE_SUFFIXES {
            if len >= *min_len && w.ends_with(suffix) {
                return (PartOfSpeech::Adjective, w.to_string());
            }
        }
        if len >= 5 && w.ends_with("ly") {
            return (PartOfSpeech::Adverb, w.to_string());
        }
        if (len >= 5 && w.ends_with("ing")) || (len >= 4 && w.ends_with("ed")) {
            return (PartOfSpeech::Verb, self.verb_lemma(w));
        }

        (PartOfSpeech::Noun, self.singularize(w))
    }

    // ── Lemmatization ──────────────────────────────────────

    /// Singular form of a (possibly plural) noun
    fn singularize(&self, w: &str) -> String {
        let lex = &self.lexicon;
        if let Some(singular) = lex.irregular_plurals.get(w) {
            return singular.clone();
        }
        if lex.uninflected.contains(w) || lex.nouns.contains(w) || w.chars().count() <= 2 {
            return w.to_string();
        }
        if w.ends_with("ss") || w.ends_with("us") || w.ends_with("is") {
            return w.to_string();
        }
        if let Some(stem) = w.strip_suffix("ies") {
            if stem.chars().count() >= 2 {
                return format!("{}y", stem);
            }
        }
        for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
            if w.ends_with(suffix) {
                return w[..w.len() - 2].to_string();
            }
        }
        w.strip_suffix('s').unwrap_or(w).to_string()
    }

    /// Base form of a verb (`running` → `run`, `baked` → `bake`)
    fn verb_lemma(&self, w: &str) -> String {
        let lex = &self.lexicon;
        if let Some(base) = lex.irregular_verbs.get(w) {
            return base.clone();
        }
        if lex.verbs.contains(w) {
            return w.to_string();
        }
        if let Some(stem) = long_stem(w, "ing") {
            return self.restore_stem(stem);
        }
        if let Some(stem) = long_stem(w, "ied") {
            return format!("{}y", stem);
        }
        if let Some(stem) = long_stem(w, "ed") {
            return self.restore_stem(stem);
        }
        if let Some(stem) = long_stem(w, "ies") {
            return format!("{}y", stem);
        }
        if let Some(stem) = w.strip_suffix('s') {
            if lex.verbs.contains(stem) {
                return stem.to_string();
            }
            if let Some(es_stem) = w.strip_suffix("es") {
                let sibilant = ["s", "x", "ch", "sh"].iter().any(|s| es_stem.ends_with(s));
                if sibilant || lex.verbs.contains(es_stem) {
                    return es_stem.to_string();
                }
            }
            return stem.to_string();
        }
        w.to_string()
    }

    /// Undo consonant doubling and silent-`e` loss on an inflection stem
    fn restore_stem(&self, stem: &str) -> String {
        let verbs = &self.lexicon.verbs;
        if verbs.contains(stem) {
            return stem.to_string();
        }
        let with_e = format!("{}e", stem);
        if verbs.contains(&with_e) {
            return with_e;
        }

        let chars: Vec<char> = stem.chars().collect();
        let n = chars.len();
        if n >= 3 && chars[n - 1] == chars[n - 2] && is_consonant(chars[n - 1]) {
            let undoubled: String = chars[..n - 1].iter().collect();
            if verbs.contains(&undoubled) || !matches!(chars[n - 1], 'l' | 's' | 'z') {
                return undoubled;
            }
            return stem.to_string();
        }
        if n == 3
            && is_consonant(chars[0])
            && is_vowel(chars[1])
            && is_consonant(chars[2])
            && !matches!(chars[2], 'w' | 'x' | 'y')
        {
            return with_e;
        }
        stem.to_string()
    }

    /// Base form if `w` is a known adjective or a comparison of one
    fn adjective_lemma(&self, w: &str) -> Option<String> {
        let lex = &self.lexicon;
        if lex.adjectives.contains(w) {
            return Some(w.to_string());
        }
        if let Some(base) = lex.irregular_adjectives.get(w) {
            return Some(base.clone());
        }

        for suffix in ["est", "er"] {
            let Some(stem) = long_stem(w, suffix) else {
                continue;
            };
            let mut candidates = vec![stem.to_string(), format!("{}e", stem)];
            if let Some(s) = stem.strip_suffix('i') {
                candidates.push(format!("{}y", s));
            }
            let chars: Vec<char> = stem.chars().collect();
            let n = chars.len();
            if n >= 3 && chars[n - 1] == chars[n - 2] {
                candidates.push(chars[..n - 1].iter().collect());
            }
            if let Some(hit) = candidates.into_iter().find(|c| lex.adjectives.contains(c)) {
                return Some(hit);
            }
        }
        None
    }
}

impl Analyzer for RuleTagger {
    fn analyze(&self, text: &str) -> Vec<AnalyzedToken> {
        let words = tokenize(text);
        let count = words.len();
        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let (pos, lemma) = self.tag_word(word, i + 1 < count);
                AnalyzedToken {
                    text: word.text.clone(),
                    lemma,
                    pos,
                }
            })
            .collect()
    }
}

/// `w` without `suffix`, if at least two chars remain
fn long_stem<'a>(w: &'a str, suffix: &str) -> Option<&'a str> {
    w.strip_suffix(suffix)
        .filter(|stem| stem.chars().count() >= 2)
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn is_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_vowel(c)
}
