//! Playback clock: current time, duration and play state, with looping.

use serde::{Deserialize, Serialize};

use crate::inputs::PlaybackCommand;

/// Floating modulo with the sign of `b`.
fn fmod(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        return 0.0;
    }
    let m = a % b;
    if (m < 0.0 && b > 0.0) || (m > 0.0 && b < 0.0) {
        m + b
    } else {
        m
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Clock {
    /// Seconds. Values `<= 0` never wrap.
    pub duration: f32,
    /// Informational; sampling is continuous in time.
    pub fps: u32,
    current_time: f32,
    playing: bool,
}

impl Clock {
    pub fn new(duration: f32, fps: u32) -> Self {
        Self {
            duration,
            fps,
            current_time: 0.0,
            playing: false,
        }
    }

    #[inline]
    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop advancing; time is kept.
    pub fn pause(&mut self) {
        self.playing = false;
    }

    /// Pause and rewind to 0.
    pub fn stop(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
    }

    /// Jump to `time`, clamped into [0, duration].
    pub fn seek(&mut self, time: f32) {
        let upper = self.duration.max(0.0);
        self.current_time = time.clamp(0.0, upper);
    }

    pub fn apply(&mut self, cmd: PlaybackCommand) {
        match cmd {
            PlaybackCommand::Play => self.play(),
            PlaybackCommand::Pause => self.pause(),
            PlaybackCommand::Stop => self.stop(),
            PlaybackCommand::Seek { time } => self.seek(time),
        }
    }

    /// Advance by `dt` seconds if playing, wrapping past the end by modulo.
    /// Returns whether the clock moved.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.current_time += dt;
        if self.duration > 0.0 && (self.current_time > self.duration || self.current_time < 0.0) {
            self.current_time = fmod(self.current_time, self.duration);
        }
        true
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(5.0, 30)
    }
}
