//! Playback clock and shared viewer types.
//!
//! The clock stands in for the video element: it tracks the playback
//! position of the selected file, advances with wall time while playing, and
//! is moved by seeks from the chapter list, the keyboard and the timeline.

use std::time::Instant;

/// Result of processing an input event.
///
/// Returned by input handlers to signal control flow decisions to the
/// application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the viewer
    Quit,
    /// Upload the currently selected file
    Upload,
    /// Start editing the selected file path
    EditPath,
    /// Show the help overlay
    Help,
}

/// Playback position of the selected video.
#[derive(Debug)]
pub struct PlaybackClock {
    /// Whether playback is paused
    pub paused: bool,
    /// Playback speed multiplier (1.0 = normal)
    pub speed: f64,
    /// Current playback position in seconds
    pub current_time: f64,
    /// Wall clock time when playback started/resumed
    pub start_time: Instant,
    /// Position at `start_time`
    pub time_offset: f64,
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackClock {
    /// A paused clock at position 0.
    pub fn new() -> Self {
        Self {
            paused: true,
            speed: 1.0,
            current_time: 0.0,
            start_time: Instant::now(),
            time_offset: 0.0,
        }
    }

    /// Rewind to 0 and pause, keeping the speed.
    pub fn reset(&mut self) {
        self.paused = true;
        self.current_time = 0.0;
        self.time_offset = 0.0;
        self.start_time = Instant::now();
    }

    /// Advance the position by elapsed wall time.
    ///
    /// Stops at the end when the duration is known. Returns true if the
    /// position changed.
    pub fn tick(&mut self, duration: Option<f64>) -> bool {
        if self.paused {
            return false;
        }
        let elapsed = self.start_time.elapsed().as_secs_f64() * self.speed;
        let mut position = self.time_offset + elapsed;
        if let Some(duration) = known(duration) {
            if position >= duration {
                position = duration;
                self.paused = true;
            }
        }
        let changed = position != self.current_time;
        self.current_time = position;
        changed
    }

    /// Move to `time`, clamped to `[0, duration]`.
    ///
    /// Non-finite targets are ignored. Returns the new position.
    pub fn seek(&mut self, time: f64, duration: Option<f64>) -> f64 {
        if !time.is_finite() {
            return self.current_time;
        }
        let upper = known(duration).unwrap_or(f64::INFINITY);
        self.current_time = time.clamp(0.0, upper);
        self.time_offset = self.current_time;
        self.start_time = Instant::now();
        self.current_time
    }

    /// Move by `delta` seconds.
    pub fn seek_by(&mut self, delta: f64, duration: Option<f64>) -> f64 {
        self.seek(self.current_time + delta, duration)
    }

    /// Toggle pause state and reset timing if resuming.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if !self.paused {
            self.start_time = Instant::now();
            self.time_offset = self.current_time;
        }
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.rebase();
        self.speed = (self.speed * 1.5).min(16.0);
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.rebase();
        self.speed = (self.speed / 1.5).max(0.1);
    }

    /// Fraction of the video played, if the duration is known.
    pub fn progress(&self, duration: Option<f64>) -> Option<f64> {
        known(duration).map(|d| (self.current_time / d).clamp(0.0, 1.0))
    }

    // Keep the position continuous across a speed change
    fn rebase(&mut self) {
        self.time_offset = self.current_time;
        self.start_time = Instant::now();
    }
}

/// A duration usable for clamping and ratios.
fn known(duration: Option<f64>) -> Option<f64> {
    duration.filter(|d| d.is_finite() && *d > 0.0)
}
