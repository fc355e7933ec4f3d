/*!
 * Mock render engine for testing.
 *
 * The mock records every played sign and simulates different engine
 * behaviors:
 * - `MockEngine::instant()` - always ready, plays succeed immediately
 * - `MockEngine::slow(ms)` - busy for a fixed delay after each play
 * - `MockEngine::never_ready()` - stays busy forever after the first play
 * - `MockEngine::invalid_after(n)` - reports an invalid status once n signs played
 * - `MockEngine::failing()` - play requests themselves fail
 */

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::engine::RenderEngine;
use crate::errors::EngineError;

/// Behavior mode for the mock engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Immediately ready after every play
    Instant,
    /// Busy for a fixed delay after each play
    Slow {
        /// Simulated animation time in milliseconds
        delay_ms: u64,
    },
    /// Never signals readiness once a sign has been played
    NeverReady,
    /// Reports an invalid status after n signs have been played
    InvalidAfter {
        /// Number of successful plays before the invalid status
        after: usize,
    },
    /// Play requests fail outright
    Failing,
}

/// Scripted render engine double recording the submitted sequence
#[derive(Debug)]
pub struct MockEngine {
    behavior: MockBehavior,
    played: Arc<Mutex<Vec<String>>>,
    last_play: Arc<Mutex<Option<Instant>>>,
    stop_requests: Arc<Mutex<usize>>,
}

impl MockEngine {
    /// Create a mock with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        MockEngine {
            behavior,
            played: Arc::new(Mutex::new(Vec::new())),
            last_play: Arc::new(Mutex::new(None)),
            stop_requests: Arc::new(Mutex::new(0)),
        }
    }

    /// Mock that is always ready
    pub fn instant() -> Self {
        Self::new(MockBehavior::Instant)
    }

    /// Mock that stays busy for `delay_ms` after each play
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Mock that never becomes ready again after the first play
    pub fn never_ready() -> Self {
        Self::new(MockBehavior::NeverReady)
    }

    /// Mock that turns invalid after `after` plays
    pub fn invalid_after(after: usize) -> Self {
        Self::new(MockBehavior::InvalidAfter { after })
    }

    /// Mock whose play requests fail
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Signs submitted so far, in submission order
    pub fn played(&self) -> Vec<String> {
        self.played.lock().clone()
    }

    /// Number of stop requests received
    pub fn stop_requests(&self) -> usize {
        *self.stop_requests.lock()
    }
}

impl Clone for MockEngine {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            played: Arc::clone(&self.played),
            last_play: Arc::clone(&self.last_play),
            stop_requests: Arc::clone(&self.stop_requests),
        }
    }
}

#[async_trait]
impl RenderEngine for MockEngine {
    async fn initialize(&self) -> Result<(), EngineError> {
        Ok(())
    }

    async fn play(&self, sign: &str) -> Result<(), EngineError> {
        if self.behavior == MockBehavior::Failing {
            return Err(EngineError::PlayFailed(format!(
                "simulated failure for '{}'",
                sign
            )));
        }
        self.played.lock().push(sign.to_string());
        *self.last_play.lock() = Some(Instant::now());
        Ok(())
    }

    async fn stop(&self) -> Result<(), EngineError> {
        *self.stop_requests.lock() += 1;
        Ok(())
    }

    fn status(&self) -> String {
        match self.behavior {
            MockBehavior::Instant | MockBehavior::Failing => "ready".to_string(),
            MockBehavior::Slow { delay_ms } => {
                let busy = self
                    .last_play
                    .lock()
                    .map(|at| at.elapsed() < Duration::from_millis(delay_ms))
                    .unwrap_or(false);
                if busy {
                    "rendering frame".to_string()
                } else {
                    "ready".to_string()
                }
            }
            MockBehavior::NeverReady => {
                if self.played.lock().is_empty() {
                    "ready".to_string()
                } else {
                    "rendering frame".to_string()
                }
            }
            MockBehavior::InvalidAfter { after } => {
                if self.played.lock().len() >= after {
                    "invalid sign identifier".to_string()
                } else {
                    "ready".to_string()
                }
            }
        }
    }
}
