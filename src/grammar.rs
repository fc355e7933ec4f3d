/*!
 * Heuristic Subject-Object-Verb reordering, the second pipeline stage.
 *
 * Tokens are classified against three static word sets (question words,
 * auxiliaries, main verbs) and rearranged so that the verb trails its
 * objects and a leading question word moves to the very end, matching
 * sign-language gloss order. The reordering is a reproducible heuristic,
 * not a parser: classification is exact lower-case membership plus an
 * "-ing"/"-ed" suffix signal.
 */

use std::collections::HashSet;

use log::debug;
use once_cell::sync::Lazy;

use crate::normalizer::Token;

/// Question words relocated to the end of the gloss sequence
static QUESTION_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "what", "where", "when", "why", "who", "whom", "whose", "which", "how",
    ]
    .into_iter()
    .collect()
});

/// Auxiliary verbs, dropped from the gloss when they split subject and verb
static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "is", "am", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have",
        "has", "had", "will", "would", "shall", "should", "can", "could", "may", "might", "must",
    ]
    .into_iter()
    .collect()
});

/// Main verbs recognized by exact match
static MAIN_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "eat", "drink", "go", "come", "run", "walk", "jump", "sit", "stand", "sleep", "play",
        "read", "write", "draw", "see", "look", "watch", "listen", "hear", "speak", "say", "tell",
        "ask", "answer", "give", "take", "get", "make", "buy", "sell", "bring", "carry", "hold",
        "throw", "catch", "push", "pull", "open", "close", "cut", "wash", "clean", "cook", "help",
        "teach", "learn", "know", "think", "want", "like", "love", "need", "use", "work", "live",
        "stop", "start", "find", "put", "call", "turn", "move", "wait", "meet", "thank", "sign",
        "understand",
    ]
    .into_iter()
    .collect()
});

/// A token counts as verb-like when it is a known main verb or carries an
/// "-ing"/"-ed" suffix. Short words are exempt from the suffix signal so
/// that plain words like "red" or "bed" never classify as verbs.
fn is_verb_like(word: &str) -> bool {
    if MAIN_VERBS.contains(word) {
        return true;
    }
    word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed"))
}

fn is_auxiliary(word: &str) -> bool {
    AUXILIARIES.contains(word)
}

fn is_question_word(word: &str) -> bool {
    QUESTION_WORDS.contains(word)
}

/// Reorder a normalized token sequence into SOV gloss order.
///
/// Empty input is replaced by a single `default_gloss` token so that
/// downstream stages never see an empty sequence. Single-token input is
/// returned unchanged.
pub fn reorder(tokens: Vec<Token>, default_gloss: &str) -> Vec<Token> {
    if tokens.is_empty() {
        debug!("Empty token sequence, substituting default gloss '{}'", default_gloss);
        return vec![Token::new(default_gloss)];
    }
    if tokens.len() == 1 {
        return tokens;
    }

    let mut tokens = tokens;

    // A leading question word moves to the very end of the result.
    let question = if is_question_word(&tokens[0].text) {
        Some(tokens.remove(0))
    } else {
        None
    };

    let aux_idx = tokens.iter().position(|t| is_auxiliary(&t.text));
    let verb_idx = tokens.iter().position(|t| is_verb_like(&t.text));

    let mut result = match (aux_idx, verb_idx) {
        // Case A: an auxiliary splits the sentence.
        (Some(aux), _) => {
            let mut out: Vec<Token> = tokens[..aux].to_vec();

            if let Some(verb) = verb_idx.filter(|v| *v > aux) {
                // Verb after the auxiliary: the auxiliary is dropped
                // from the gloss, everything else between subject and
                // verb joins the objects so negations survive.
                out.extend_from_slice(&tokens[aux + 1..verb]);
                out.extend_from_slice(&tokens[verb + 1..]);
                out.push(tokens[verb].clone());
            } else if aux + 1 < tokens.len() && is_verb_like(&tokens[aux + 1].text) {
                out.extend_from_slice(&tokens[aux + 2..]);
                out.push(tokens[aux + 1].clone());
            } else {
                // No verb at all: everything after the auxiliary becomes
                // objects, nothing is recorded as the verb.
                out.extend_from_slice(&tokens[aux + 1..]);
            }
            out
        }
        // Case B: no auxiliary, but a verb-like token.
        (None, Some(verb)) => {
            let mut out: Vec<Token> = tokens[..verb].to_vec();
            out.extend_from_slice(&tokens[verb + 1..]);
            out.push(tokens[verb].clone());
            out
        }
        // Case C: nothing recognized, leave the order untouched.
        (None, None) => tokens,
    };

    if let Some(q) = question {
        result.push(q);
    }

    result
}
