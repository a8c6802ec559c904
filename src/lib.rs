//! # Maxwell's Demon
//!
//! Particles bounce around a box, and black holes swallow them until full.
//!
//! ## Layout
//!
//! - `core` - entities and the container that steps them; no drawing, no sleeping
//! - `ports` - what the core needs from outside (`Renderer`, `Pacer`)
//! - `adapters` - a retained `Canvas`, a `SleepPacer` and an eframe window
//! - `config`, `scenario` - run parameters and entity layouts for the driver
//!
//! ## Usage
//!
//! ```rust
//! use maxwell_demon::core::{Color, Container};
//!
//! let mut container = Container::new();
//! container.create(300, 200);
//! container.add_hole(50, 50, 1);
//! container.add_particle(50, 50, Color::Blue);
//! container.start(1);
//!
//! assert!(container.consult().contains("Particles: 0"));
//! assert!(container.ok());
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod ports;
pub mod scenario;

// Re-exports for convenience
pub use crate::config::SimulationParams;
pub use crate::core::{Census, Color, Container, EntityId};
pub use crate::error::{Error, Result};
pub use crate::scenario::Scenario;
