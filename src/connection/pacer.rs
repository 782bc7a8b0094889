//! Pause capability injected into connections.

use std::time::Duration;

/// Something that can pause between status lines.
///
/// Connections never sleep directly; they ask a `Pacer`. Production code
/// uses [`ThreadPacer`], tests use [`RecordingPacer`].
pub trait Pacer {
    fn pause(&mut self, duration: Duration);
}

/// Blocks the current thread for each pause.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Records requested pauses without sleeping.
#[derive(Clone, Debug, Default)]
pub struct RecordingPacer {
    pauses: Vec<Duration>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pause requested so far, in order.
    pub fn pauses(&self) -> &[Duration] {
        &self.pauses
    }

    pub fn total(&self) -> Duration {
        self.pauses.iter().sum()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}
