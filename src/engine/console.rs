/*!
 * Console render engine: a logging stand-in for the real avatar engine.
 *
 * Each played sign is logged and the engine reports a busy status for a
 * configurable animation duration before flipping back to ready, so the
 * sequencer's pacing and backpressure behave exactly as they would
 * against a real renderer.
 */

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use parking_lot::Mutex;

use crate::engine::RenderEngine;
use crate::errors::EngineError;

/// Logging stand-in engine for CLI playback
#[derive(Debug)]
pub struct ConsoleEngine {
    status: Arc<Mutex<String>>,
    animation: Duration,
}

impl ConsoleEngine {
    /// Create an engine that stays busy for `animation` after each play
    pub fn new(animation: Duration) -> Self {
        ConsoleEngine {
            status: Arc::new(Mutex::new("ready".to_string())),
            animation,
        }
    }
}

impl Default for ConsoleEngine {
    fn default() -> Self {
        Self::new(Duration::from_millis(600))
    }
}

#[async_trait]
impl RenderEngine for ConsoleEngine {
    async fn initialize(&self) -> Result<(), EngineError> {
        *self.status.lock() = "ready".to_string();
        debug!("Console engine initialized");
        Ok(())
    }

    async fn play(&self, sign: &str) -> Result<(), EngineError> {
        info!("▶ signing: {}", sign);
        *self.status.lock() = format!("animating frame of '{}'", sign);

        // Flip back to ready once the simulated animation time elapses.
        let status = Arc::clone(&self.status);
        let animation = self.animation;
        tokio::spawn(async move {
            tokio::time::sleep(animation).await;
            *status.lock() = "ready".to_string();
        });
        Ok(())
    }

    async fn stop(&self) -> Result<(), EngineError> {
        *self.status.lock() = "ready".to_string();
        debug!("Console engine stopped");
        Ok(())
    }

    fn status(&self) -> String {
        self.status.lock().clone()
    }
}
