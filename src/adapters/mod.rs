//! Adapters - concrete implementations of the port traits

pub mod canvas;
pub mod sleep;
pub mod window;

pub use canvas::Canvas;
pub use sleep::SleepPacer;
