/*!
 * Render engine adapters.
 *
 * The external 3-D avatar engine is modelled as an async trait the
 * sequencer drives: initialize once, submit one sign identifier at a
 * time, poll a free-form status string for readiness, and stop on
 * request. Two implementations ship with the crate:
 * - `console`: a logging stand-in used by the CLI
 * - `mock`: a scripted engine for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::EngineError;

/// Interpretation of the engine's observable status string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineStatus {
    /// The previous animation finished; the engine accepts the next sign
    Ready,
    /// Still animating the previous sign
    Busy,
    /// The engine rejected a sign or is in a broken state
    Error,
}

/// Classify a raw status string.
///
/// A value containing "invalid" means error; containing "ready" or
/// lacking a "frame" marker means ready; anything else means busy.
pub fn parse_status(status: &str) -> EngineStatus {
    let status = status.to_lowercase();
    if status.contains("invalid") {
        EngineStatus::Error
    } else if status.contains("ready") || !status.contains("frame") {
        EngineStatus::Ready
    } else {
        EngineStatus::Busy
    }
}

/// Common interface for render engine implementations
#[async_trait]
pub trait RenderEngine: Send + Sync + Debug {
    /// Prepare the engine for playback
    async fn initialize(&self) -> Result<(), EngineError>;

    /// Asynchronously start animating one sign identifier.
    /// Completion of the animation itself is signalled through `status`,
    /// not through this future.
    async fn play(&self, sign: &str) -> Result<(), EngineError>;

    /// Best-effort request to halt the current animation
    async fn stop(&self) -> Result<(), EngineError>;

    /// Current externally-observable status string, polled by the
    /// sequencer for readiness and error detection
    fn status(&self) -> String;
}

pub mod console;
pub mod mock;
