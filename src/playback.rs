//! Timeline playback engine.
//!
//! Owns a continuous simulated-time cursor over `[0, total_span]` and the
//! commands that move it: play, pause, step, seek, speed. Decoupled from
//! any rendering technology: the environment drives [`PlaybackEngine::tick`]
//! at whatever cadence it likes (frame clock, timer, explicit driver) and
//! polls [`PlaybackEngine::cursor`] once per render pass.
//!
//! # State machine
//!
//! States `Idle`, `Playing`, `Paused`:
//! - `Idle`: before any loaded run, or after `reset`; cursor = 0.
//! - `Playing`: each tick advances the cursor by `TICK_INCREMENT × speed`;
//!   reaching the span auto-pauses.
//! - `Paused`: cursor fixed; steps and seeks still move it.
//!
//! A tick applies only in `Playing`, so a tick scheduled before a `pause`
//! or `reset` lands as a no-op instead of a stale advance.

/// Simulated time added to the cursor per tick at speed 1.0.
pub const TICK_INCREMENT: f64 = 0.02;

/// Cursor adjustment applied by a single step command.
pub const STEP_INCREMENT: f64 = 0.5;

/// Playback lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No run loaded, or explicitly reset; cursor is 0.
    #[default]
    Idle,
    /// Cursor advances on each tick.
    Playing,
    /// Cursor holds (including after reaching the end of the span).
    Paused,
}

/// Scrubbable time cursor over a simulation's Gantt span.
///
/// # Example
///
/// ```
/// use sjf_sim::playback::{PlaybackEngine, PlaybackState};
///
/// let mut playback = PlaybackEngine::new();
/// playback.load_span(10);
/// playback.play();
/// playback.tick();
/// assert_eq!(playback.state(), PlaybackState::Playing);
/// assert!(playback.cursor() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    cursor: f64,
    state: PlaybackState,
    speed: f64,
    total_span: f64,
}

impl PlaybackEngine {
    /// Creates an idle engine with no loaded run.
    pub fn new() -> Self {
        Self {
            cursor: 0.0,
            state: PlaybackState::Idle,
            speed: 1.0,
            total_span: 0.0,
        }
    }

    /// Installs the span of a freshly produced simulation result.
    ///
    /// Performs the lifecycle reset: cursor 0, state `Idle`, speed 1.0.
    /// Spans below zero are treated as zero.
    pub fn load_span(&mut self, total_span: i64) {
        self.total_span = total_span.max(0) as f64;
        self.cursor = 0.0;
        self.state = PlaybackState::Idle;
        self.speed = 1.0;
    }

    /// Current cursor position, always within `[0, total_span]`.
    pub fn cursor(&self) -> f64 {
        self.cursor
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current speed multiplier.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Span the cursor ranges over (0 with no loaded run).
    pub fn total_span(&self) -> f64 {
        self.total_span
    }

    /// Whether the engine is currently advancing.
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Starts or resumes playback.
    ///
    /// No-op with no loaded run (`total_span == 0`) or with the cursor
    /// already at the end of the span.
    pub fn play(&mut self) {
        if self.total_span > 0.0 && self.cursor < self.total_span {
            self.state = PlaybackState::Playing;
        }
    }

    /// Pauses playback; the cursor holds its position.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Advances the cursor by one playback tick.
    ///
    /// Applies only in `Playing`: a tick scheduled before a pause or
    /// reset must not move the cursor. Reaching the end of the span
    /// clamps the cursor and auto-transitions to `Paused`.
    ///
    /// Returns the cursor after the tick.
    pub fn tick(&mut self) -> f64 {
        if self.state == PlaybackState::Playing {
            self.cursor += TICK_INCREMENT * self.speed;
            if self.cursor >= self.total_span {
                self.cursor = self.total_span;
                self.state = PlaybackState::Paused;
            }
        }
        self.cursor
    }

    /// Moves the cursor forward by [`STEP_INCREMENT`], clamped to the span.
    ///
    /// No-op with no loaded run. Does not change the playing/paused state.
    pub fn step_forward(&mut self) {
        if self.total_span > 0.0 {
            self.cursor = (self.cursor + STEP_INCREMENT).min(self.total_span);
        }
    }

    /// Moves the cursor back by [`STEP_INCREMENT`], clamped to zero.
    ///
    /// No-op with no loaded run. Does not change the playing/paused state.
    pub fn step_back(&mut self) {
        if self.total_span > 0.0 {
            self.cursor = (self.cursor - STEP_INCREMENT).max(0.0);
        }
    }

    /// Sets the cursor to `clamp(t, 0, total_span)`.
    ///
    /// Permitted in any state; seeking while playing continues playing
    /// from the new position.
    pub fn seek(&mut self, t: f64) {
        self.cursor = t.clamp(0.0, self.total_span);
    }

    /// Sets the speed multiplier, effective from the next tick.
    ///
    /// Non-positive (or non-finite) multipliers are rejected and the
    /// current speed kept.
    pub fn set_speed(&mut self, multiplier: f64) {
        if multiplier.is_finite() && multiplier > 0.0 {
            self.speed = multiplier;
        }
    }

    /// Returns to `Idle` with cursor 0 and speed 1.0, discarding any
    /// in-progress playback. The loaded span is kept, so `play` works
    /// again immediately.
    pub fn reset(&mut self) {
        self.cursor = 0.0;
        self.state = PlaybackState::Idle;
        self.speed = 1.0;
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new()
    }
}
