/*!
 * Full workflow tests: translate text, then play the resolved signs
 * through the sequencer against a mock engine
 */

use std::sync::Arc;
use std::time::Duration;

use crate::common::{builtin_translator, init_test_logging};
use sigloss::engine::mock::MockEngine;
use sigloss::sequencer::{PlaybackSequencer, PlaybackState, PlaybackTiming};

fn fast_timing() -> PlaybackTiming {
    PlaybackTiming::from_millis(10, 2, 500)
}

/// Translate then play: the engine receives exactly the resolved
/// identifiers, in order
#[tokio::test]
async fn test_translateAndPlay_shouldSubmitResolvedSignsInOrder() {
    init_test_logging();
    let translation = builtin_translator().translate("I am eating food");
    assert_eq!(translation.sign_identifiers, vec!["me", "food", "eat"]);

    let engine = Arc::new(MockEngine::slow(15));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());
    sequencer.start(translation.sign_identifiers.clone());

    let state = sequencer.wait_until_terminal().await;
    assert_eq!(state, PlaybackState::Completed);
    assert_eq!(engine.played(), translation.sign_identifiers);
}

/// Empty text never reaches the sequencer as an empty sequence
#[tokio::test]
async fn test_translateAndPlay_withEmptyText_shouldStillPlayDefaultGloss() {
    let translation = builtin_translator().translate("");
    assert_eq!(translation.sign_identifiers.len(), 1);

    let engine = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());
    sequencer.start(translation.sign_identifiers);

    let state = sequencer.wait_until_terminal().await;
    assert_eq!(state, PlaybackState::Completed);
    assert_eq!(engine.played(), vec!["hello"]);
}

/// A renderer rejection mid-sequence halts playback with an error state
/// but leaves the translator reusable for the next cycle
#[tokio::test]
async fn test_playback_afterEngineError_shouldAllowNewCycle() {
    let translation = builtin_translator().translate("I am eating food");

    let broken = Arc::new(MockEngine::invalid_after(1));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&broken), fast_timing());
    sequencer.start(translation.sign_identifiers.clone());
    assert_eq!(sequencer.wait_until_terminal().await, PlaybackState::Error);

    // The failure is terminal to that cycle only: a fresh start on a
    // healthy engine plays the same translation to completion.
    let healthy = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&healthy), fast_timing());
    sequencer.start(translation.sign_identifiers.clone());
    assert_eq!(sequencer.wait_until_terminal().await, PlaybackState::Completed);
    assert_eq!(healthy.played(), translation.sign_identifiers);
}

/// Cancellation mid-sentence leaves the remaining signs unplayed
#[tokio::test]
async fn test_playback_stoppedMidSentence_shouldNotFinishSequence() {
    let translation = builtin_translator().translate("I am eating food");

    let timing = PlaybackTiming::from_millis(5000, 5, 20_000);
    let engine = Arc::new(MockEngine::slow(50));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), timing);

    sequencer.start(translation.sign_identifiers.clone());
    tokio::time::sleep(Duration::from_millis(100)).await;
    sequencer.stop().await;

    assert_eq!(sequencer.state(), PlaybackState::Stopped);
    assert!(engine.played().len() < translation.sign_identifiers.len());
}
