//! # Ports
//!
//! Contracts the simulation needs from the outside world.
//!
//! - `Renderer` consumes the draw intents the container queues
//! - `Pacer` slows the step loop down while the container is on screen
//!
//! Concrete implementations live in `adapters`.

mod pacer;
mod renderer;

pub use pacer::{NoPause, Pacer};
pub use renderer::Renderer;
