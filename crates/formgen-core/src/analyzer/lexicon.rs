//! Lexicon — the word lists behind the rule-based tagger
//!
//! The built-in English lexicon is tuned for short product phrases:
//! colors, materials and marketing qualifiers are adjectives, common
//! brands and connectivity standards are proper nouns, and `-ing`/`-er`
//! words that name products (`clothing`, `cleaner`) are listed as nouns so
//! suffix rules never claim them.
//!
//! A lexicon can also be read from JSON. Every key is optional and unknown
//! keys are rejected:
//!
//! ```json
//! { "adjectives": ["gizmo"], "irregular_plurals": { "cacti": "cactus" } }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Word lists consulted by [`RuleTagger`](super::RuleTagger)
///
/// All entries are lowercase. Immutable once handed to a tagger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Lexicon {
    pub determiners: HashSet<String>,
    pub pronouns: HashSet<String>,
    pub adpositions: HashSet<String>,
    pub conjunctions: HashSet<String>,
    pub adverbs: HashSet<String>,
    pub particles: HashSet<String>,
    pub numerals: HashSet<String>,
    /// Auxiliary form → lemma (`was` → `be`)
    pub auxiliaries: HashMap<String, String>,
    pub nouns: HashSet<String>,
    pub proper_nouns: HashSet<String>,
    pub adjectives: HashSet<String>,
    pub verbs: HashSet<String>,
    /// Plural → singular for nouns the suffix rules get wrong
    pub irregular_plurals: HashMap<String, String>,
    /// Inflected form → base (`made` → `make`)
    pub irregular_verbs: HashMap<String, String>,
    /// Comparative/superlative → base (`best` → `good`)
    pub irregular_adjectives: HashMap<String, String>,
    /// Nouns whose plural and singular coincide
    pub uninflected: HashSet<String>,
}

impl Lexicon {
    /// The built-in English lexicon
    pub fn english() -> Self {
        Lexicon {
            determiners: set(DETERMINERS),
            pronouns: set(PRONOUNS),
            adpositions: set(ADPOSITIONS),
            conjunctions: set(CONJUNCTIONS),
            adverbs: set(ADVERBS),
            particles: set(PARTICLES),
            numerals: set(NUMERALS),
            auxiliaries: map(AUXILIARIES),
            nouns: set(NOUNS),
            proper_nouns: set(PROPER_NOUNS),
            adjectives: set(ADJECTIVES),
            verbs: set(VERBS),
            irregular_plurals: map(IRREGULAR_PLURALS),
            irregular_verbs: map(IRREGULAR_VERBS),
            irregular_adjectives: map(IRREGULAR_ADJECTIVES),
            uninflected: set(UNINFLECTED),
        }
    }

    /// Parse a lexicon from JSON text
    ///
    /// # Errors
    /// Returns `ModelUnavailable` if the text is not a valid lexicon document.
    pub fn from_json(text: &str) -> Result<Self> {
        let lexicon: Lexicon = serde_json::from_str(text)
            .map_err(|e| Error::ModelUnavailable(format!("invalid lexicon: {}", e)))?;
        Ok(lexicon.lowercased())
    }

    /// Read a lexicon from a JSON file
    ///
    /// # Errors
    /// Returns `ModelUnavailable` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::ModelUnavailable(format!("{}: {}", path.display(), e)))?;
        let lexicon = Self::from_json(&text).map_err(|e| match e {
            Error::ModelUnavailable(msg) => {
                Error::ModelUnavailable(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
        tracing::info!(path = %path.display(), entries = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    /// Merge `other` into this lexicon; on map conflicts `other` wins
    pub fn extend(&mut self, other: Lexicon) {
        self.determiners.extend(other.determiners);
        self.pronouns.extend(other.pronouns);
        self.adpositions.extend(other.adpositions);
        self.conjunctions.extend(other.conjunctions);
        self.adverbs.extend(other.adverbs);
        self.particles.extend(other.particles);
        self.numerals.extend(other.numerals);
        self.auxiliaries.extend(other.auxiliaries);
        self.nouns.extend(other.nouns);
        self.proper_nouns.extend(other.proper_nouns);
        self.adjectives.extend(other.adjectives);
        self.verbs.extend(other.verbs);
        self.irregular_plurals.extend(other.irregular_plurals);
        self.irregular_verbs.extend(other.irregular_verbs);
        self.irregular_adjectives.extend(other.irregular_adjectives);
        self.uninflected.extend(other.uninflected);
    }

    /// Total number of entries across all lists
    pub fn len(&self) -> usize {
        self.determiners.len()
            + self.pronouns.len()
            + self.adpositions.len()
            + self.conjunctions.len()
            + self.adverbs.len()
            + self.particles.len()
            + self.numerals.len()
            + self.auxiliaries.len()
            + self.nouns.len()
            + self.proper_nouns.len()
            + self.adjectives.len()
            + self.verbs.len()
            + self.irregular_plurals.len()
            + self.irregular_verbs.len()
            + self.irregular_adjectives.len()
            + self.uninflected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Hand-written lexicon files are not trusted to be lowercase.
    fn lowercased(self) -> Self {
        fn lower_set(s: HashSet<String>) -> HashSet<String> {
            s.into_iter().map(|w| w.to_lowercase()).collect()
        }
        fn lower_map(m: HashMap<String, String>) -> HashMap<String, String> {
            m.into_iter()
                .map(|(k, v)| (k.to_lowercase(), v.to_lowercase()))
                .collect()
        }

        Lexicon {
            determiners: lower_set(self.determiners),
            pronouns: lower_set(self.pronouns),
            adpositions: lower_set(self.adpositions),
            conjunctions: lower_set(self.conjunctions),
            adverbs: lower_set(self.adverbs),
            particles: lower_set(self.particles),
            numerals: lower_set(self.numerals),
            auxiliaries: lower_map(self.auxiliaries),
            nouns: lower_set(self.nouns),
            proper_nouns: lower_set(self.proper_nouns),
            adjectives: lower_set(self.adjectives),
            verbs: lower_set(self.verbs),
            irregular_plurals: lower_map(self.irregular_plurals),
            irregular_verbs: lower_map(self.irregular_verbs),
            irregular_adjectives: lower_map(self.irregular_adjectives),
            uninflected: lower_set(self.uninflected),
        }
    }
}

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ── Closed classes ─────────────────────────────────────────

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "my", "your", "his", "her", "its",
    "our", "their", "what", "which", "whose", "few", "several", "many", "much",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "you", "he", "him", "she", "it", "we", "us", "they", "them", "mine", "yours",
    "hers", "ours", "theirs", "myself", "yourself", "himself", "herself", "itself", "ourselves",
    "themselves", "who", "whom", "someone", "something", "anything", "everything", "nothing",
    "everyone", "anyone",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "without", "from", "to", "into", "onto",
    "over", "under", "above", "below", "between", "among", "through", "across", "along",
    "around", "about", "against", "behind", "beside", "beyond", "during", "inside", "outside",
    "near", "per", "via", "within", "toward", "towards", "upon", "off", "except", "vs",
    "versus",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "yet", "so", "if", "because", "while", "although", "though",
    "unless", "whereas", "than",
];

const ADVERBS: &[&str] = &[
    "very", "really", "extremely", "quite", "too", "also", "just", "only", "even", "ever",
    "never", "always", "often", "now", "then", "here", "there", "well", "almost", "rather",
    "more", "most", "less", "least", "again", "already", "soon", "together", "away",
];

const PARTICLES: &[&str] = &["not", "up", "out"];

const NUMERALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "twenty", "fifty", "hundred", "thousand", "million", "dozen",
];

const AUXILIARIES: &[(&str, &str)] = &[
    ("am", "be"),
    ("is", "be"),
    ("are", "be"),
    ("was", "be"),
    ("were", "be"),
    ("be", "be"),
    ("been", "be"),
    ("being", "be"),
    ("has", "have"),
    ("have", "have"),
    ("had", "have"),
    ("having", "have"),
    ("do", "do"),
    ("does", "do"),
    ("did", "do"),
    ("can", "can"),
    ("could", "could"),
    ("will", "will"),
    ("would", "would"),
    ("shall", "shall"),
    ("should", "should"),
    ("may", "may"),
    ("might", "might"),
    ("must", "must"),
];

// ── Open classes ───────────────────────────────────────────

// Product nouns that a suffix rule or the comparative check would otherwise
// misread (`-ing`, `-ly`, `-ive`, `-able`, `-ic`, `-ish`, `-er`, `-ed`).
const NOUNS: &[&str] = &[
    // -ing
    "clothing", "bedding", "lighting", "flooring", "ring", "string", "ceiling", "building",
    "wedding", "sling", "swing", "thing", "spring", "wing", "earring", "stocking", "legging",
    "painting", "seasoning", "packaging", "plumbing", "fencing", "roofing", "railing",
    "housing", "filling", "frosting", "dressing", "stuffing", "topping", "bearing", "fitting",
    "coating", "pudding", "icing", "sibling", "duckling", "dumpling", "awning",
    // -ly
    "supply", "family", "jelly", "belly", "assembly", "butterfly", "dragonfly", "lily",
    "trolley",
    // -ed
    "bed", "sled", "shed", "seed", "feed", "speed", "reed", "weed",
    // -ive / -able / -ic / -ish
    "drive", "hive", "olive", "archive", "adhesive", "table", "cable", "vegetable",
    "turntable", "timetable", "music", "traffic", "fabric", "tunic", "mosaic", "garlic",
    "picnic", "clinic", "topic", "graphic", "comic", "tonic", "mechanic", "attic", "dish",
    "radish", "relish", "polish", "finish", "varnish",
    // -er on an adjective stem
    "cooler", "warmer", "cleaner", "dryer", "lighter", "liner", "freshener", "softener",
    "sharpener", "thinner", "cutter", "filler", "cooker", "chiller", "roller", "trimmer",
];

const PROPER_NOUNS: &[&str] = &[
    // connectivity and display standards
    "bluetooth", "wifi", "usb", "hdmi", "led", "lcd", "oled", "qled", "amoled", "gps", "nfc",
    "lte", "hd", "uhd", "hdr", "dslr",
    // brands and platforms
    "apple", "samsung", "sony", "lg", "nike", "adidas", "puma", "reebok", "dell", "hp",
    "lenovo", "asus", "acer", "xiaomi", "huawei", "google", "microsoft", "amazon", "android",
    "ios", "iphone", "ipad", "macbook", "airpods", "windows", "linux", "playstation", "xbox",
    "nintendo", "canon", "nikon", "bosch", "philips", "panasonic", "jbl", "bose", "logitech",
    "intel", "amd", "nvidia", "ikea", "lego",
];

const ADJECTIVES: &[&str] = &[
    // colors
    "black", "white", "red", "blue", "green", "yellow", "pink", "purple", "brown", "grey",
    "gray", "silver", "gold", "golden", "beige", "navy", "maroon", "teal", "turquoise",
    "multicolor", "transparent",
    // materials
    "cotton", "leather", "wool", "woolen", "woollen", "silk", "linen", "denim", "polyester",
    "nylon", "plastic", "wooden", "metal", "metallic", "steel", "stainless", "aluminum",
    "aluminium", "bamboo", "ceramic", "glass", "canvas", "rubber", "velvet", "suede",
    "cashmere", "copper", "brass", "titanium", "carbon", "marble", "granite", "porcelain",
    "crystal", "organic", "synthetic", "vegan", "faux",
    // size and shape
    "small", "large", "big", "mini", "little", "tiny", "huge", "medium", "long", "short",
    "tall", "high", "low", "wide", "narrow", "thin", "thick", "slim", "light", "heavy",
    "lightweight", "compact", "flat", "round", "oval", "deep", "full",
    // quality and marketing
    "fast", "quick", "slow", "new", "old", "fresh", "hot", "cold", "warm", "cool", "soft",
    "hard", "smart", "digital", "electric", "electronic", "automatic", "wireless", "portable",
    "premium", "luxury", "classic", "modern", "vintage", "casual", "formal", "good", "great",
    "bad", "cheap", "expensive", "durable", "waterproof", "natural", "pure", "clean", "dry",
    "wet", "free", "open", "real", "simple", "basic", "original", "official", "standard",
    "extra", "double", "single", "quiet", "loud", "bright", "dark", "sharp", "strong", "safe",
    "sweet", "sour", "spicy", "healthy", "fancy", "pretty", "cute", "elegant", "rechargeable",
    "adjustable", "foldable", "pro", "max", "plus", "lite", "ultra", "super", "mega", "handmade",
    "refurbished", "unisex", "outdoor", "indoor",
];

const VERBS: &[&str] = &[
    "buy", "sell", "get", "give", "keep", "make", "take", "bring", "need", "want", "fit",
    "hold", "protect", "support", "connect", "include", "provide", "use", "charge", "cancel",
    "bake", "hike", "ride", "wear", "carry", "store", "travel",
];

const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("people", "person"),
    ("oxen", "ox"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("shelves", "shelf"),
    ("halves", "half"),
    ("loaves", "loaf"),
    ("wolves", "wolf"),
    ("calves", "calf"),
    ("scarves", "scarf"),
    ("thieves", "thief"),
    ("potatoes", "potato"),
    ("tomatoes", "tomato"),
    ("heroes", "hero"),
    ("echoes", "echo"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("criteria", "criterion"),
    ("buses", "bus"),
    ("gases", "gas"),
    ("lenses", "lens"),
    ("canvases", "canvas"),
    ("quizzes", "quiz"),
    ("movies", "movie"),
    ("cookies", "cookie"),
    ("hoodies", "hoodie"),
    ("smoothies", "smoothie"),
    ("brownies", "brownie"),
    ("calories", "calorie"),
    ("beanies", "beanie"),
    ("onesies", "onesie"),
    ("zombies", "zombie"),
    ("selfies", "selfie"),
    ("headaches", "headache"),
    ("niches", "niche"),
    ("caches", "cache"),
    ("moustaches", "moustache"),
    ("mustaches", "mustache"),
];

const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("made", "make"),
    ("built", "build"),
    ("worn", "wear"),
    ("wore", "wear"),
    ("sold", "sell"),
    ("bought", "buy"),
    ("held", "hold"),
    ("kept", "keep"),
    ("ran", "run"),
    ("got", "get"),
    ("gave", "give"),
    ("given", "give"),
    ("took", "take"),
    ("taken", "take"),
    ("brought", "bring"),
    ("felt", "feel"),
    ("sent", "send"),
    ("found", "find"),
    ("grown", "grow"),
    ("woven", "weave"),
    ("spun", "spin"),
    ("frozen", "freeze"),
    ("broken", "break"),
    ("hidden", "hide"),
    ("written", "write"),
    ("chosen", "choose"),
    ("driven", "drive"),
    ("ridden", "ride"),
];

const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"),
    ("best", "good"),
    ("worse", "bad"),
    ("worst", "bad"),
];

const UNINFLECTED: &[&str] = &[
    "series", "species", "news", "sheep", "deer", "fish", "aircraft", "electronics",
    "scissors", "pliers", "tongs", "jeans", "pants", "trousers", "shorts", "pajamas",
    "pyjamas", "tights", "clothes", "lens", "atlas", "chassis", "gas",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_has_every_list() {
        let lex = Lexicon::english();
        assert!(lex.determiners.contains("the"));
        assert_eq!(lex.auxiliaries.get("was").map(String::as_str), Some("be"));
        assert!(lex.adjectives.contains("wireless"));
        assert!(lex.proper_nouns.contains("bluetooth"));
        assert_eq!(
            lex.irregular_plurals.get("knives").map(String::as_str),
            Some("knife")
        );
        assert!(!lex.is_empty());
    }

    #[test]
    fn test_tables_are_lowercase() {
        let lex = Lexicon::english();
        assert_eq!(lex.clone().lowercased(), lex);
    }

    #[test]
    fn test_from_json_partial_document() {
        let lex = Lexicon::from_json(r#"{"adjectives": ["Gizmo"], "nouns": ["widget"]}"#).unwrap();
        assert!(lex.adjectives.contains("gizmo"));
        assert!(lex.nouns.contains("widget"));
        assert!(lex.determiners.is_empty());
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = Lexicon::from_json(r#"{"adjektives": ["gizmo"]}"#).unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Lexicon::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("formgen_no_such_lexicon.json");
        let _ = std::fs::remove_file(&path);
        let err = Lexicon::load(&path).unwrap_err();
        match err {
            Error::ModelUnavailable(msg) => assert!(msg.contains("formgen_no_such_lexicon.json")),
            other => panic!("expected ModelUnavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("formgen_lexicon_load_test.json");
        std::fs::write(&path, r#"{"proper_nouns": ["acme"]}"#).expect("write temp");
        let lex = Lexicon::load(&path).unwrap();
        assert!(lex.proper_nouns.contains("acme"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_extend_merges_and_overrides() {
        let mut lex = Lexicon::english();
        let before = lex.adjectives.len();
        let extra = Lexicon::from_json(
            r#"{"adjectives": ["gizmo", "blue"], "irregular_plurals": {"men": "gentleman"}}"#,
        )
        .unwrap();
        lex.extend(extra);
        assert_eq!(lex.adjectives.len(), before + 1);
        assert_eq!(
            lex.irregular_plurals.get("men").map(String::as_str),
            Some("gentleman")
        );
    }
}
