//! # Pacer Port
//!
//! Animation pacing for the step loop.

/// Hook called after every full step while the container is visible.
///
/// Implementations decide how long to wait; headless runs use [`NoPause`].
pub trait Pacer {
    /// `step` counts the steps completed over the container's lifetime, starting at 1.
    fn pause(&mut self, step: u64);
}

/// Pacer that returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPause;

impl Pacer for NoPause {
    fn pause(&mut self, _step: u64) {}
}

impl<F: FnMut(u64)> Pacer for F {
    fn pause(&mut self, step: u64) {
        self(step)
    }
}
