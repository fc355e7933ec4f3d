/*!
 * Text normalization, the first stage of the gloss pipeline.
 *
 * Splits raw input on whitespace, lower-cases every word, strips
 * surrounding punctuation and expands contractions in place using a
 * static table. No token is ever dropped; a contraction expands into
 * multiple tokens at its original position.
 */

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// A single word unit flowing through the pipeline.
///
/// `raw` keeps the chunk as it appeared in the input, `text` is the
/// normalized (lower-case, punctuation-free) form used for all
/// classification and catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The original whitespace-delimited chunk
    pub raw: String,
    /// The normalized word form
    pub text: String,
}

impl Token {
    /// Create a token whose raw and normalized forms are the same word
    pub fn new(text: &str) -> Self {
        Token {
            raw: text.to_string(),
            text: text.to_string(),
        }
    }
}

/// Static contraction table: contracted form -> expansion words.
///
/// Keys are already lower-case and keep their apostrophe, which is why
/// punctuation stripping preserves interior apostrophes until after the
/// table lookup.
static CONTRACTIONS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
    map.insert("don't", &["do", "not"]);
    map.insert("doesn't", &["does", "not"]);
    map.insert("didn't", &["did", "not"]);
    map.insert("can't", &["can", "not"]);
    map.insert("couldn't", &["could", "not"]);
    map.insert("won't", &["will", "not"]);
    map.insert("wouldn't", &["would", "not"]);
    map.insert("shouldn't", &["should", "not"]);
    map.insert("isn't", &["is", "not"]);
    map.insert("aren't", &["are", "not"]);
    map.insert("wasn't", &["was", "not"]);
    map.insert("weren't", &["were", "not"]);
    map.insert("haven't", &["have", "not"]);
    map.insert("hasn't", &["has", "not"]);
    map.insert("hadn't", &["had", "not"]);
    map.insert("i'm", &["i", "am"]);
    map.insert("i'll", &["i", "will"]);
    map.insert("i've", &["i", "have"]);
    map.insert("i'd", &["i", "would"]);
    map.insert("you're", &["you", "are"]);
    map.insert("you'll", &["you", "will"]);
    map.insert("you've", &["you", "have"]);
    map.insert("we're", &["we", "are"]);
    map.insert("we'll", &["we", "will"]);
    map.insert("we've", &["we", "have"]);
    map.insert("they're", &["they", "are"]);
    map.insert("they'll", &["they", "will"]);
    map.insert("they've", &["they", "have"]);
    map.insert("he's", &["he", "is"]);
    map.insert("she's", &["she", "is"]);
    map.insert("it's", &["it", "is"]);
    map.insert("that's", &["that", "is"]);
    map.insert("there's", &["there", "is"]);
    map.insert("what's", &["what", "is"]);
    map.insert("where's", &["where", "is"]);
    map.insert("who's", &["who", "is"]);
    map.insert("how's", &["how", "is"]);
    map.insert("let's", &["let", "us"]);
    map
});

/// Lower-case a chunk and strip punctuation, keeping interior apostrophes
/// so contraction keys still match.
fn clean_word(chunk: &str) -> String {
    chunk
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect::<String>()
        .trim_matches('\'')
        .to_string()
}

/// Normalize raw text into an ordered token sequence.
///
/// Empty or all-punctuation input yields an empty sequence; the grammar
/// stage substitutes a default token in that case.
pub fn normalize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for chunk in text.split_whitespace() {
        let cleaned = clean_word(chunk);
        if cleaned.is_empty() {
            continue;
        }

        match CONTRACTIONS.get(cleaned.as_str()) {
            Some(expansion) => {
                // Expansion tokens replace the contraction in place,
                // all carrying the original raw chunk.
                for word in expansion.iter() {
                    tokens.push(Token {
                        raw: chunk.to_string(),
                        text: (*word).to_string(),
                    });
                }
            }
            None => {
                // Apostrophes that survived cleaning are not part of any
                // contraction key; drop them from the normalized form.
                let text = cleaned.replace('\'', "");
                tokens.push(Token {
                    raw: chunk.to_string(),
                    text,
                });
            }
        }
    }

    tokens
}
