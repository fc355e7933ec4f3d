/*!
 * End-to-end tests of the text-to-gloss pipeline
 */

use crate::common::{builtin_translator, small_translator};

/// Determinism: identical input and catalog yield identical output
#[test]
fn test_translate_shouldBeDeterministic() {
    let translator = builtin_translator();
    for text in [
        "I am eating food",
        "what is your name",
        "I don't like rain",
        "red blue green",
        "",
    ] {
        assert_eq!(translator.translate(text), translator.translate(text));
    }
}

/// Length invariant: sign identifiers align one-to-one with display tokens
#[test]
fn test_translate_shouldUpholdLengthInvariant() {
    let translator = builtin_translator();
    for text in [
        "I am eating food",
        "what is your name",
        "xqzt gibberish wordsoup",
        "a",
        "",
        "Isn't it?",
    ] {
        let result = translator.translate(text);
        assert_eq!(
            result.sign_identifiers.len(),
            result.display_tokens.len(),
            "length invariant violated for {:?}",
            text
        );
        assert!(result.sign_identifiers.iter().all(|s| !s.is_empty()));
    }
}

/// Scenario: "I am eating food" ends up as subject-object-verb glosses
#[test]
fn test_translate_withAuxiliaryVerbSentence_shouldReorderToSov() {
    let result = builtin_translator().translate("I am eating food");
    assert_eq!(result.display_tokens, vec!["i", "food", "eating"]);
    // "eating" strips to "eat" through the morphological fallback
    assert_eq!(result.sign_identifiers, vec!["me", "food", "eat"]);
}

/// Scenario: unclassifiable input passes through unreordered
#[test]
fn test_translate_withColorList_shouldKeepOrder() {
    let result = builtin_translator().translate("red blue green");
    assert_eq!(result.display_tokens, vec!["red", "blue", "green"]);
}

/// Scenario: a leading question word lands at the end
#[test]
fn test_translate_withQuestion_shouldMoveQuestionWordToEnd() {
    let result = builtin_translator().translate("What is your name?");
    assert_eq!(result.display_tokens.last().map(|s| s.as_str()), Some("what"));
}

/// Empty input produces the single default gloss, never an empty sequence
#[test]
fn test_translate_withEmptyInput_shouldNeverYieldEmptySequence() {
    for text in ["", "   ", "?!"] {
        let result = small_translator().translate(text);
        assert_eq!(result.display_tokens, vec!["hello"]);
        assert_eq!(result.sign_identifiers, vec!["hello"]);
    }
}

/// Contractions survive the whole pipeline
#[test]
fn test_translate_withContraction_shouldExpandBeforeReordering() {
    let result = builtin_translator().translate("I don't eat meat");
    // "do" is an auxiliary: subject "i", objects after the verb "eat",
    // with "not" and "meat" trailing as objects of the gloss.
    assert!(result.display_tokens.contains(&"not".to_string()));
    assert_eq!(result.display_tokens.last().map(|s| s.as_str()), Some("eat"));
}

/// An unknown word still resolves to some identifier (filler taxonomy:
/// never an error)
#[test]
fn test_translate_withUnknownWord_shouldResolveToFiller() {
    let result = small_translator().translate("xqzt");
    assert_eq!(result.display_tokens, vec!["xqzt"]);
    assert_eq!(result.sign_identifiers.len(), 1);
    assert!(!result.sign_identifiers[0].is_empty());
}
