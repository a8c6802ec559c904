use super::entity::{Color, EntityId};
use super::intent::{Drawable, Shape, ShapeKey, ShapeKind};
use crate::error::{Error, Result};

/// Particles closer than this to a hole's position can be absorbed.
/// Matches the radius of the rendered hole.
pub const ABSORPTION_RADIUS: f64 = 20.0;

/// Rendered hole diameter.
pub const HOLE_DIAMETER: u32 = 40;

/// A stationary black hole that swallows a finite number of particles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hole {
    id: EntityId,
    x: i32,
    y: i32,
    capacity: u32,
    visible: bool,
}

impl Hole {
    /// Create a hidden hole.
    ///
    /// Errors:
    /// - `Error::NegativeCapacity` if `capacity < 0`.
    pub fn new(x: i32, y: i32, capacity: i32) -> Result<Self> {
        let capacity = u32::try_from(capacity).map_err(|_| Error::NegativeCapacity(capacity))?;
        Ok(Self {
            id: EntityId::next(),
            x,
            y,
            capacity,
            visible: false,
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Particles this hole can still absorb.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether `(x, y)` lies strictly inside the absorption radius.
    pub fn reaches(&self, x: i32, y: i32) -> bool {
        let dx = f64::from(x) - f64::from(self.x);
        let dy = f64::from(y) - f64::from(self.y);
        dx.hypot(dy) < ABSORPTION_RADIUS
    }

    /// Take one particle if capacity remains. A full hole declines quietly.
    pub fn consume_particle(&mut self) -> bool {
        if self.capacity > 0 {
            self.capacity -= 1;
            true
        } else {
            false
        }
    }
}

impl Drawable for Hole {
    fn key(&self) -> ShapeKey {
        ShapeKey::Entity(self.id)
    }

    fn shape(&self) -> Shape {
        Shape::new(
            ShapeKind::Circle {
                diameter: HOLE_DIAMETER,
            },
            self.x,
            self.y,
            Color::Black,
        )
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consume_until_empty() -> Result<()> {
        let mut h = Hole::new(0, 0, 2)?;
        assert!(h.consume_particle());
        assert_eq!(h.capacity(), 1);
        assert!(h.consume_particle());
        assert_eq!(h.capacity(), 0);
        assert!(!h.consume_particle());
        assert_eq!(h.capacity(), 0);
        Ok(())
    }

    #[test]
    fn zero_capacity_is_allowed_and_inert() -> Result<()> {
        let mut h = Hole::new(3, 4, 0)?;
        assert!(!h.consume_particle());
        Ok(())
    }

    #[test]
    fn negative_capacity_rejected() {
        let err = Hole::new(0, 0, -1).unwrap_err();
        assert_eq!(err, Error::NegativeCapacity(-1));
    }

    #[test]
    fn reach_is_strict() -> Result<()> {
        let h = Hole::new(100, 100, 1)?;
        assert!(h.reaches(100, 100));
        assert!(h.reaches(119, 100));
        assert!(!h.reaches(120, 100));
        // 12^2 + 16^2 = 20^2
        assert!(!h.reaches(112, 116));
        assert!(h.reaches(111, 116));
        Ok(())
    }
}
