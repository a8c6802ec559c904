//! Run configuration for the driver.

use std::time::Duration;

// ===================================================================================
// Default Constants
// ===================================================================================

pub const DEFAULT_WIDTH: i32 = 400;
pub const DEFAULT_HEIGHT: i32 = 300;
pub const DEFAULT_STEPS: u32 = 200;
pub const DEFAULT_PAUSE_MS: u64 = 10;
pub const DEFAULT_SCATTER: usize = 0;

// ===================================================================================
// Simulation Parameters
// ===================================================================================

/// Everything the driver needs to set up and run one simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationParams {
    /// Container width in pixels.
    pub width: i32,
    /// Container height in pixels.
    pub height: i32,
    /// Steps to run.
    pub steps: u32,
    /// Pause after each step while visible, in milliseconds. `None` means
    /// [`DEFAULT_PAUSE_MS`] in a window and no pause at all when headless.
    pub pause_ms: Option<u64>,
    /// Extra random particles added on top of the reference scenario.
    pub scatter: usize,
    /// Seed for the scatter; `None` draws one from the OS.
    pub seed: Option<u64>,
    /// Run without opening a window.
    pub headless: bool,
}

impl SimulationParams {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_pause_ms(mut self, pause_ms: u64) -> Self {
        self.pause_ms = Some(pause_ms);
        self
    }

    pub fn with_scatter(mut self, count: usize, seed: Option<u64>) -> Self {
        self.scatter = count;
        self.seed = seed;
        self
    }

    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Per-step pause as a `Duration`.
    pub fn pause(&self) -> Duration {
        let ms = match self.pause_ms {
            Some(ms) => ms,
            None if self.headless => 0,
            None => DEFAULT_PAUSE_MS,
        };
        Duration::from_millis(ms)
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        SimulationParams {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            steps: DEFAULT_STEPS,
            pause_ms: None,
            scatter: DEFAULT_SCATTER,
            seed: None,
            headless: false,
        }
    }
}
