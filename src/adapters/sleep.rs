//! # Sleep Pacer
//!
//! Blocks the calling thread between steps so a viewer can follow along.

use std::thread;
use std::time::Duration;

use crate::ports::Pacer;

/// Sleeps for a fixed duration after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepPacer(pub Duration);

impl SleepPacer {
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self, _step: u64) {
        if !self.0.is_zero() {
            thread::sleep(self.0);
        }
    }
}
