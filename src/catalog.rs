/*!
 * Sign catalog: the read-only word-to-animation lookup table.
 *
 * The catalog maps lower-case words to sign identifiers (the stem of a
 * playable animation resource) and carries a reference vocabulary of
 * known identifiers in source order, used by the resolver's substring
 * fallback. It is loaded once at startup, either from the JSON dataset
 * emitted by the dataset generator or from the compact built-in
 * vocabulary, and never mutated afterwards.
 */

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::{debug, info};
use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::errors::CatalogError;

/// One record of the external JSON dataset.
///
/// The generator also emits an SOV example sentence and a category per
/// word; the core accepts and ignores them.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    /// Vocabulary word (catalog key)
    pub word: String,
    /// Sign identifier the word resolves to
    pub sign: String,
    /// Example sentence in SOV order (unused by the core)
    #[serde(default, rename = "sovExample")]
    pub sov_example: Option<String>,
    /// Dataset category (unused by the core)
    #[serde(default)]
    pub category: Option<String>,
}

/// Immutable word-to-sign lookup table plus reference vocabulary
#[derive(Debug, Clone, Default)]
pub struct SignCatalog {
    /// Lower-case word -> sign identifier
    signs: HashMap<String, String>,
    /// Known sign identifiers, in the order they first appeared in the
    /// source dataset. Iteration order matters for the substring
    /// fallback, so this is a Vec rather than a set.
    vocabulary: Vec<String>,
}

impl SignCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from (word, sign) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for (word, sign) in pairs {
            catalog.insert(word.into(), sign.into());
        }
        catalog
    }

    /// Load a catalog from the JSON dataset format
    /// (`[{ "word": ..., "sign": ..., ... }]`).
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        let reader = BufReader::new(file);
        let records: Vec<CatalogRecord> = serde_json::from_reader(reader)?;

        let mut catalog = Self::new();
        for record in records {
            if record.sign.trim().is_empty() {
                return Err(CatalogError::EmptySign { word: record.word });
            }
            catalog.insert(record.word, record.sign);
        }

        info!(
            "Loaded sign catalog: {} words, {} reference signs",
            catalog.len(),
            catalog.vocabulary.len()
        );
        Ok(catalog)
    }

    /// Insert a single mapping. Keys are lower-cased; the sign identifier
    /// joins the reference vocabulary the first time it appears.
    pub fn insert(&mut self, word: String, sign: String) {
        let word = word.trim().to_lowercase();
        let sign = sign.trim().to_lowercase();
        if word.is_empty() || sign.is_empty() {
            debug!("Skipping empty catalog entry");
            return;
        }
        if !self.vocabulary.contains(&sign) {
            self.vocabulary.push(sign.clone());
        }
        self.signs.insert(word, sign);
    }

    /// Exact lookup on a lower-cased word
    pub fn get(&self, word: &str) -> Option<&str> {
        self.signs.get(&word.to_lowercase()).map(|s| s.as_str())
    }

    /// Whether a word has an exact catalog entry
    pub fn contains(&self, word: &str) -> bool {
        self.signs.contains_key(&word.to_lowercase())
    }

    /// Reference vocabulary in source order
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Number of word entries
    pub fn len(&self) -> usize {
        self.signs.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.signs.is_empty()
    }
}

/// Compact built-in starter vocabulary so the CLI works without an
/// external dataset. Words map to the animation the avatar performs,
/// not necessarily to themselves.
static BUILTIN_PAIRS: &[(&str, &str)] = &[
    // Movement
    ("walk", "walk"),
    ("run", "run"),
    ("jog", "run"),
    ("jump", "jump"),
    ("sit", "sit"),
    ("stand", "stand"),
    ("climb", "up"),
    ("swim", "swim"),
    ("fly", "fly"),
    ("fall", "fall"),
    ("turn", "turn"),
    ("go", "go"),
    ("come", "come"),
    ("stop", "stop"),
    // Hand actions
    ("push", "push"),
    ("pull", "pull"),
    ("lift", "carry"),
    ("carry", "carry"),
    ("hold", "hold"),
    ("grab", "take"),
    ("throw", "throw"),
    ("catch", "catch"),
    ("point", "show"),
    ("wave", "wave"),
    ("touch", "touch"),
    ("open", "open"),
    ("close", "close"),
    ("give", "give"),
    ("take", "take"),
    // Daily life
    ("eat", "eat"),
    ("drink", "drink"),
    ("cook", "cook"),
    ("clean", "wash"),
    ("wash", "wash"),
    ("sleep", "sleep"),
    ("read", "read"),
    ("write", "write"),
    ("draw", "draw"),
    ("study", "learn"),
    ("learn", "learn"),
    ("teach", "teach"),
    ("work", "work"),
    ("play", "play"),
    ("buy", "take"),
    ("sell", "give"),
    ("make", "make"),
    ("help", "help"),
    // Communication
    ("talk", "speak"),
    ("speak", "speak"),
    ("say", "speak"),
    ("tell", "speak"),
    ("ask", "ask"),
    ("answer", "reply"),
    ("listen", "hear"),
    ("hear", "hear"),
    ("watch", "see"),
    ("see", "look"),
    ("look", "see"),
    ("call", "phone"),
    ("understand", "know"),
    ("know", "know"),
    ("think", "think"),
    ("sign", "gesture"),
    // People and common nouns
    ("i", "me"),
    ("me", "me"),
    ("you", "you"),
    ("we", "we"),
    ("they", "they"),
    ("name", "name"),
    ("food", "food"),
    ("water", "water"),
    ("house", "house"),
    ("home", "house"),
    ("school", "school"),
    ("book", "book"),
    ("time", "time"),
    ("person", "person"),
    ("friend", "friend"),
    ("family", "family"),
    // Question words and courtesy
    ("what", "what"),
    ("where", "where"),
    ("when", "when"),
    ("why", "why"),
    ("who", "who"),
    ("how", "how"),
    ("hello", "hello"),
    ("please", "please"),
    ("sorry", "sorry"),
    ("yes", "yes"),
    ("no", "no"),
    ("not", "no"),
    ("good", "good"),
    ("bad", "bad"),
    ("thank", "thank"),
    ("do", "do"),
    ("love", "love"),
    ("like", "like"),
    ("want", "want"),
    ("need", "need"),
];

static BUILTIN: Lazy<SignCatalog> =
    Lazy::new(|| SignCatalog::from_pairs(BUILTIN_PAIRS.iter().copied()));

impl SignCatalog {
    /// The built-in starter catalog
    pub fn builtin() -> &'static SignCatalog {
        &BUILTIN
    }
}
