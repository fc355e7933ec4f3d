/*!
 * Playback sequencing: paces resolved sign identifiers into the render
 * engine one at a time.
 *
 * The sequencer owns a small state machine
 * (`Idle -> Playing -> {Completed, Stopped, Error}`) and a single driver
 * task running two periodic triggers: a coarse step tick that submits
 * the next sign, and a fine readiness poll that inspects the engine's
 * status string. A step tick while the engine is still animating is a
 * no-op, so signs are never reordered and never overlap. A watchdog
 * bounds how long the sequencer waits for readiness before giving up
 * with an error instead of hanging.
 */

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::engine::{parse_status, EngineStatus, RenderEngine};

/// Lifecycle of one playback cycle. Owned exclusively by the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No playback has been started yet
    Idle,
    /// Signs are being submitted to the engine
    Playing,
    /// Playback was cancelled by the user
    Stopped,
    /// Every sign in the sequence was played
    Completed,
    /// The engine reported an error or readiness never arrived
    Error,
}

impl PlaybackState {
    /// Whether this is a state playback can be restarted from
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stopped | Self::Completed | Self::Error)
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Playing => "playing",
            Self::Stopped => "stopped",
            Self::Completed => "completed",
            Self::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// Timing knobs for the driver task
#[derive(Debug, Clone, Copy)]
pub struct PlaybackTiming {
    /// Coarse cadence: one sign submission attempt per tick
    pub step: Duration,
    /// Fine cadence for polling the engine status
    pub poll: Duration,
    /// How long to wait for readiness before erroring out
    pub watchdog: Duration,
}

impl PlaybackTiming {
    /// Build a timing set from millisecond values
    pub fn from_millis(step_ms: u64, poll_ms: u64, watchdog_ms: u64) -> Self {
        PlaybackTiming {
            step: Duration::from_millis(step_ms),
            poll: Duration::from_millis(poll_ms),
            watchdog: Duration::from_millis(watchdog_ms),
        }
    }
}

impl Default for PlaybackTiming {
    fn default() -> Self {
        Self::from_millis(1000, 250, 10_000)
    }
}

/// Progress shared between the sequencer handle and its driver task
#[derive(Debug)]
struct Progress {
    state: PlaybackState,
    position: Option<usize>,
}

/// Paces a resolved sign sequence into a render engine
#[derive(Debug)]
pub struct PlaybackSequencer<E: RenderEngine + 'static> {
    engine: Arc<E>,
    timing: PlaybackTiming,
    progress: Arc<Mutex<Progress>>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

impl<E: RenderEngine + 'static> PlaybackSequencer<E> {
    /// Create an idle sequencer over an engine with default timing
    pub fn new(engine: Arc<E>) -> Self {
        Self::with_timing(engine, PlaybackTiming::default())
    }

    /// Create an idle sequencer with explicit timing
    pub fn with_timing(engine: Arc<E>, timing: PlaybackTiming) -> Self {
        PlaybackSequencer {
            engine,
            timing,
            progress: Arc::new(Mutex::new(Progress {
                state: PlaybackState::Idle,
                position: None,
            })),
            driver: Mutex::new(None),
        }
    }

    /// Current playback state
    pub fn state(&self) -> PlaybackState {
        self.progress.lock().state
    }

    /// Index of the next sign to submit, if playback is active
    pub fn position(&self) -> Option<usize> {
        self.progress.lock().position
    }

    /// Begin playback of a resolved sign sequence.
    ///
    /// A no-op when the sequence is empty or playback is already
    /// running. Must be called from within a tokio runtime; the driver
    /// task owns all further state mutation until it terminates.
    pub fn start(&self, signs: Vec<String>) {
        if signs.is_empty() {
            debug!("Ignoring start request with empty sign sequence");
            return;
        }
        {
            let mut progress = self.progress.lock();
            if progress.state == PlaybackState::Playing {
                debug!("Ignoring start request while already playing");
                return;
            }
            progress.state = PlaybackState::Playing;
            progress.position = Some(0);
        }

        info!("Starting playback of {} signs", signs.len());
        let handle = tokio::spawn(drive(
            Arc::clone(&self.engine),
            Arc::clone(&self.progress),
            self.timing,
            signs,
        ));
        // Any previous driver already terminated; just drop its handle.
        if let Some(old) = self.driver.lock().replace(handle) {
            old.abort();
        }
    }

    /// Cancel playback.
    ///
    /// Kills the driver task (both periodic triggers die with it),
    /// transitions to `Stopped` and issues a best-effort stop request to
    /// the engine. Failure of that request is logged, not propagated.
    /// Callable from any non-idle state.
    pub async fn stop(&self) {
        if let Some(handle) = self.driver.lock().take() {
            handle.abort();
        }
        {
            let mut progress = self.progress.lock();
            if progress.state == PlaybackState::Idle {
                return;
            }
            progress.state = PlaybackState::Stopped;
            progress.position = None;
        }
        info!("Playback stopped by user");
        if let Err(e) = self.engine.stop().await {
            warn!("Engine stop request failed: {}", e);
        }
    }

    /// Wait until the current playback cycle reaches a terminal state
    /// and return it. Returns immediately when idle.
    pub async fn wait_until_terminal(&self) -> PlaybackState {
        loop {
            let state = self.state();
            if state != PlaybackState::Playing {
                return state;
            }
            tokio::time::sleep(self.timing.poll).await;
        }
    }
}

impl<E: RenderEngine + 'static> Drop for PlaybackSequencer<E> {
    fn drop(&mut self) {
        // No timer may outlive the sequencer.
        if let Some(handle) = self.driver.lock().take() {
            handle.abort();
        }
    }
}

/// The driver task: single-flight submission with backpressure.
async fn drive<E: RenderEngine>(
    engine: Arc<E>,
    progress: Arc<Mutex<Progress>>,
    timing: PlaybackTiming,
    signs: Vec<String>,
) {
    let mut step = interval(timing.step);
    step.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut poll = interval(timing.poll);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    // The readiness guard is the sole admission control: no sign is
    // submitted while it is false.
    let mut ready = true;
    let mut position = 0usize;
    let mut deadline = Instant::now() + timing.watchdog;

    loop {
        tokio::select! {
            _ = poll.tick() => {
                match parse_status(&engine.status()) {
                    EngineStatus::Error => {
                        fail(&progress, "engine reported an invalid status");
                        return;
                    }
                    EngineStatus::Ready => {
                        ready = true;
                    }
                    EngineStatus::Busy => {
                        if Instant::now() >= deadline {
                            fail(&progress, "readiness watchdog expired");
                            return;
                        }
                    }
                }
            }
            _ = step.tick() => {
                if !ready {
                    // Backpressure: the engine is still animating,
                    // retry on the next tick.
                    continue;
                }
                if position == signs.len() {
                    complete(&progress);
                    return;
                }

                ready = false;
                let sign = &signs[position];
                debug!("Submitting sign {}/{}: {}", position + 1, signs.len(), sign);
                if let Err(e) = engine.play(sign).await {
                    fail(&progress, &format!("play request failed: {}", e));
                    return;
                }
                position += 1;
                progress.lock().position = Some(position);
                deadline = Instant::now() + timing.watchdog;
            }
        }
    }
}

fn complete(progress: &Mutex<Progress>) {
    let mut p = progress.lock();
    p.state = PlaybackState::Completed;
    p.position = None;
    info!("Playback completed");
}

fn fail(progress: &Mutex<Progress>, reason: &str) {
    let mut p = progress.lock();
    p.state = PlaybackState::Error;
    p.position = None;
    error!("Playback error: {}", reason);
}
