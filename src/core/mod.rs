//! # Core
//!
//! The simulation itself: entities and the container that steps them.
//!
//! - `Particle` - moving point that bounces off the walls
//! - `Hole` - black hole with a finite appetite
//! - `Demon` - stationary, decorative
//! - `Container` - owns all of the above and runs the step loop
//!
//! Nothing in here draws or sleeps. Rendering is expressed as `DrawIntent`
//! values and pacing goes through the `Pacer` port.

mod container;
mod demon;
mod entity;
mod hole;
mod intent;
mod particle;

pub use container::{Census, Container, WALL_MARGIN};
pub use demon::{Demon, DEMON_SIZE};
pub use entity::{Color, EntityId, EntityKind};
pub use hole::{Hole, ABSORPTION_RADIUS, HOLE_DIAMETER};
pub use intent::{DrawIntent, Drawable, Shape, ShapeKey, ShapeKind};
pub use particle::{Particle, PARTICLE_DIAMETER};
