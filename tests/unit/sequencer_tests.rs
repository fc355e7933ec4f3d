/*!
 * Tests for the playback sequencer state machine
 */

use std::sync::Arc;
use std::time::Duration;

use crate::common::init_test_logging;
use sigloss::engine::mock::MockEngine;
use sigloss::sequencer::{PlaybackSequencer, PlaybackState, PlaybackTiming};

fn fast_timing() -> PlaybackTiming {
    PlaybackTiming::from_millis(10, 2, 300)
}

/// Playback ordering: exactly one submission per sign, in sequence order
#[tokio::test]
async fn test_playback_withThreeSigns_shouldSubmitExactlyThreeInOrder() {
    init_test_logging();
    let engine = Arc::new(MockEngine::slow(15));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    sequencer.start(vec!["i".into(), "food".into(), "eat".into()]);
    let state = sequencer.wait_until_terminal().await;

    assert_eq!(state, PlaybackState::Completed);
    assert_eq!(engine.played(), vec!["i", "food", "eat"]);
}

/// The sequencer also drives to completion under a plain blocking
/// runtime, not only under #[tokio::test]
#[test]
fn test_playback_underBlockingRuntime_shouldComplete() {
    init_test_logging();
    let engine = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    let state = tokio_test::block_on(async {
        sequencer.start(vec!["a".into(), "b".into()]);
        sequencer.wait_until_terminal().await
    });

    assert_eq!(state, PlaybackState::Completed);
    assert_eq!(engine.played(), vec!["a", "b"]);
}

/// Stop mid-playback prevents later submissions
#[tokio::test]
async fn test_stop_afterFirstSign_shouldSuppressRemainingSigns() {
    // A long step cadence guarantees only the immediate first submission
    // happens before we cancel.
    let timing = PlaybackTiming::from_millis(5000, 5, 20_000);
    let engine = Arc::new(MockEngine::slow(50));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), timing);

    sequencer.start(vec!["a".into(), "b".into(), "c".into()]);
    tokio::time::sleep(Duration::from_millis(100)).await;
    sequencer.stop().await;

    assert_eq!(sequencer.state(), PlaybackState::Stopped);
    assert_eq!(engine.played(), vec!["a"]);
    assert_eq!(engine.stop_requests(), 1);

    // Give any stray timer a chance to misbehave, then re-check.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(engine.played(), vec!["a"]);
}

/// start() while already playing is a no-op
#[tokio::test]
async fn test_start_whilePlaying_shouldBeIgnored() {
    let timing = PlaybackTiming::from_millis(20, 5, 1000);
    let engine = Arc::new(MockEngine::slow(10));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), timing);

    sequencer.start(vec!["a".into(), "b".into()]);
    sequencer.start(vec!["x".into(), "y".into()]);
    let state = sequencer.wait_until_terminal().await;

    assert_eq!(state, PlaybackState::Completed);
    assert_eq!(engine.played(), vec!["a", "b"]);
}

/// start() with an empty sequence is a no-op
#[tokio::test]
async fn test_start_withEmptySequence_shouldBeIgnored() {
    let engine = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    sequencer.start(Vec::new());
    assert_eq!(sequencer.state(), PlaybackState::Idle);
    assert!(engine.played().is_empty());
}

/// stop() before any start is a no-op and keeps the idle state
#[tokio::test]
async fn test_stop_whileIdle_shouldStayIdle() {
    let engine = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    sequencer.stop().await;
    assert_eq!(sequencer.state(), PlaybackState::Idle);
    assert_eq!(engine.stop_requests(), 0);
}

/// Watchdog expiry transitions to the error state instead of hanging
#[tokio::test]
async fn test_playback_withStuckEngine_shouldErrorViaWatchdog() {
    let timing = PlaybackTiming::from_millis(10, 2, 100);
    let engine = Arc::new(MockEngine::never_ready());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), timing);

    sequencer.start(vec!["a".into(), "b".into()]);
    let state = sequencer.wait_until_terminal().await;

    assert_eq!(state, PlaybackState::Error);
    assert_eq!(engine.played(), vec!["a"]);
}

/// An invalid engine status transitions to the error state
#[tokio::test]
async fn test_playback_withInvalidStatus_shouldError() {
    let engine = Arc::new(MockEngine::invalid_after(2));
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    sequencer.start(vec!["a".into(), "b".into(), "c".into()]);
    let state = sequencer.wait_until_terminal().await;

    assert_eq!(state, PlaybackState::Error);
    assert!(engine.played().len() <= 2);
}

/// A failing play request transitions to the error state
#[tokio::test]
async fn test_playback_withFailingPlay_shouldError() {
    let engine = Arc::new(MockEngine::failing());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    sequencer.start(vec!["a".into()]);
    let state = sequencer.wait_until_terminal().await;
    assert_eq!(state, PlaybackState::Error);
}

/// Playing is re-entered from a terminal state
#[tokio::test]
async fn test_start_afterStop_shouldPlayAgain() {
    let engine = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    sequencer.start(vec!["a".into()]);
    sequencer.wait_until_terminal().await;
    sequencer.stop().await;
    assert_eq!(sequencer.state(), PlaybackState::Stopped);

    sequencer.start(vec!["b".into()]);
    let state = sequencer.wait_until_terminal().await;
    assert_eq!(state, PlaybackState::Completed);
    assert_eq!(engine.played(), vec!["a", "b"]);
}

/// Position tracks the next sign and clears on completion
#[tokio::test]
async fn test_position_shouldClearAfterCompletion() {
    let engine = Arc::new(MockEngine::instant());
    let sequencer = PlaybackSequencer::with_timing(Arc::clone(&engine), fast_timing());

    assert_eq!(sequencer.position(), None);
    sequencer.start(vec!["a".into(), "b".into()]);
    sequencer.wait_until_terminal().await;
    assert_eq!(sequencer.position(), None);
}

/// State display names match the documented lifecycle
#[test]
fn test_playbackState_displayNames() {
    assert_eq!(PlaybackState::Idle.to_string(), "idle");
    assert_eq!(PlaybackState::Playing.to_string(), "playing");
    assert_eq!(PlaybackState::Stopped.to_string(), "stopped");
    assert_eq!(PlaybackState::Completed.to_string(), "completed");
    assert_eq!(PlaybackState::Error.to_string(), "error");
    assert!(!PlaybackState::Playing.is_terminal());
    assert!(PlaybackState::Error.is_terminal());
}
