/*!
 * Sign resolution: maps one gloss token to exactly one animation
 * identifier via an ordered fallback chain.
 *
 * The chain is a list of pure strategies tried in sequence, each
 * `fn(&str, &SignCatalog) -> Option<String>`, terminated by a total
 * filler step, so every token resolves to some identifier and the same
 * input always yields the same output. Resolution order is significant
 * and must not be rearranged.
 */

use log::debug;

use crate::catalog::SignCatalog;

/// Generic identifier for action-like words
pub const GENERIC_ACTION: &str = "do";
/// Generic identifier for person-like words ("-er"/"-or")
pub const GENERIC_PERSON: &str = "person";
/// Generic identifier for quality words ("-ness"/"-ity"/"-ly")
pub const GENERIC_POSITIVE: &str = "good";
/// Generic identifier for "-ment" words
pub const GENERIC_WORK: &str = "work";

/// Fixed filler identifiers for the deterministic last resort.
/// The list order matters: the filler index is the token's first
/// character code modulo this length.
const FILLERS: &[&str] = &["you", "me", "this", "good", "time", "help", "know", "work"];

/// One step of the resolution chain
pub type ResolveStep = fn(&str, &SignCatalog) -> Option<String>;

/// The fallback chain in resolution order. The filler step is not part
/// of the chain because it never fails.
pub const RESOLVE_CHAIN: &[ResolveStep] = &[
    exact_match,
    morphological_variant,
    substring_match,
    suffix_class,
];

/// Resolve a token to an animation identifier. Never fails.
pub fn resolve(token: &str, catalog: &SignCatalog) -> String {
    let token = token.to_lowercase();

    for step in RESOLVE_CHAIN {
        if let Some(sign) = step(&token, catalog) {
            return sign;
        }
    }

    let sign = filler(&token);
    debug!("No resolution for '{}', using filler '{}'", token, sign);
    sign
}

/// Step 1: exact catalog lookup
pub fn exact_match(token: &str, catalog: &SignCatalog) -> Option<String> {
    catalog.get(token).map(|s| s.to_string())
}

/// Candidate stems for one stripped suffix: the bare stem, the stem with
/// a doubled final consonant collapsed ("runn" -> "run") and the stem
/// with a restored silent "e" ("mak" -> "make").
fn stem_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string()];
    let chars: Vec<char> = stem.chars().collect();
    if chars.len() >= 2 && chars[chars.len() - 1] == chars[chars.len() - 2] {
        candidates.push(chars[..chars.len() - 1].iter().collect());
    }
    candidates.push(format!("{}e", stem));
    candidates
}

/// Step 2: morphological variants, tried in fixed order: strip "ing",
/// strip "ed", strip "s", strip "es", replace "ies" with "y". The first
/// variant with a catalog hit wins.
pub fn morphological_variant(token: &str, catalog: &SignCatalog) -> Option<String> {
    let mut variants: Vec<String> = Vec::new();

    if let Some(stem) = token.strip_suffix("ing") {
        variants.extend(stem_candidates(stem));
    }
    if let Some(stem) = token.strip_suffix("ed") {
        variants.extend(stem_candidates(stem));
    }
    if let Some(stem) = token.strip_suffix('s') {
        variants.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix("es") {
        variants.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix("ies") {
        variants.push(format!("{}y", stem));
    }

    variants
        .into_iter()
        .filter(|v| !v.is_empty())
        .find_map(|v| catalog.get(&v).map(|s| s.to_string()))
}

/// Step 3: substring containment over the reference vocabulary. The
/// first reference sign of length > 3 contained in the token wins;
/// vocabulary source order is the only tie-break.
pub fn substring_match(token: &str, catalog: &SignCatalog) -> Option<String> {
    catalog
        .vocabulary()
        .iter()
        .find(|sign| sign.len() > 3 && token.contains(sign.as_str()))
        .cloned()
}

/// Step 4: heuristic suffix classes, checked in fixed order
pub fn suffix_class(token: &str, _catalog: &SignCatalog) -> Option<String> {
    const CLASSES: &[(&str, &str)] = &[
        ("ing", GENERIC_ACTION),
        ("ed", GENERIC_ACTION),
        ("er", GENERIC_PERSON),
        ("or", GENERIC_PERSON),
        ("tion", GENERIC_ACTION),
        ("sion", GENERIC_ACTION),
        ("ness", GENERIC_POSITIVE),
        ("ity", GENERIC_POSITIVE),
        ("ment", GENERIC_WORK),
        ("ly", GENERIC_POSITIVE),
    ];

    CLASSES
        .iter()
        .find(|(suffix, _)| token.ends_with(suffix))
        .map(|(_, sign)| sign.to_string())
}

/// Step 5: deterministic filler from the token's first character code
pub fn filler(token: &str) -> String {
    let code = token.chars().next().map(|c| c as usize).unwrap_or(0);
    FILLERS[code % FILLERS.len()].to_string()
}
