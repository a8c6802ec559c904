use super::entity::{Color, EntityId};
use super::intent::{Drawable, Shape, ShapeKey, ShapeKind};
use crate::error::{Error, Result};

/// Rendered particle diameter; the container keeps this much clearance from
/// the far walls.
pub const PARTICLE_DIAMETER: u32 = 10;

/// A moving point that bounces off the container walls.
///
/// Velocity components start at +1 and are only ever negated, so they are
/// never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Particle {
    id: EntityId,
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
    color: Color,
    visible: bool,
}

impl Particle {
    /// Create a hidden particle at `(x, y)` heading down-right.
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            id: EntityId::next(),
            x,
            y,
            dx: 1,
            dy: 1,
            color,
            visible: false,
        }
    }

    /// Create a hidden particle with an explicit velocity.
    ///
    /// Errors:
    /// - `Error::ZeroVelocity` if either component is 0.
    pub fn with_velocity(x: i32, y: i32, color: Color, dx: i32, dy: i32) -> Result<Self> {
        if dx == 0 || dy == 0 {
            return Err(Error::ZeroVelocity);
        }
        Ok(Self {
            dx,
            dy,
            ..Self::new(x, y, color)
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

    /// Velocity as `(dx, dy)`.
    pub fn velocity(&self) -> (i32, i32) {
        (self.dx, self.dy)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Shift the position by one velocity step. No clamping to the walls
    /// happens here; that is the container's business. At the edge of the
    /// `i32` range the position saturates.
    #[inline]
    pub fn advance(&mut self) {
        self.x = self.x.saturating_add(self.dx);
        self.y = self.y.saturating_add(self.dy);
    }

    #[inline]
    pub fn reverse_x(&mut self) {
        self.dx = self.dx.saturating_neg();
    }

    #[inline]
    pub fn reverse_y(&mut self) {
        self.dy = self.dy.saturating_neg();
    }
}

impl Drawable for Particle {
    fn key(&self) -> ShapeKey {
        ShapeKey::Entity(self.id)
    }

    fn shape(&self) -> Shape {
        Shape::new(
            ShapeKind::Circle {
                diameter: PARTICLE_DIAMETER,
            },
            self.x,
            self.y,
            self.color,
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
    fn new_particle_defaults() {
        let p = Particle::new(5, 6, Color::Red);
        assert_eq!((p.x(), p.y()), (5, 6));
        assert_eq!(p.velocity(), (1, 1));
        assert_eq!(p.color(), Color::Red);
        assert!(!p.is_visible());
    }

    #[test]
    fn advance_adds_velocity() -> Result<()> {
        let mut p = Particle::with_velocity(10, 10, Color::Blue, 3, -2)?;
        p.advance();
        assert_eq!((p.x(), p.y()), (13, 8));
        p.advance();
        assert_eq!((p.x(), p.y()), (16, 6));
        Ok(())
    }

    #[test]
    fn advance_saturates_at_i32_bounds() -> Result<()> {
        let mut p = Particle::with_velocity(i32::MAX, i32::MIN, Color::Blue, 1, -1)?;
        p.advance();
        assert_eq!((p.x(), p.y()), (i32::MAX, i32::MIN));

        let mut p = Particle::with_velocity(0, 0, Color::Blue, i32::MIN, 1)?;
        p.reverse_x();
        assert_eq!(p.velocity(), (i32::MAX, 1));
        Ok(())
    }

    #[test]
    fn reversal_negates_one_axis() {
        let mut p = Particle::new(0, 0, Color::Green);
        p.reverse_x();
        assert_eq!(p.velocity(), (-1, 1));
        p.reverse_y();
        assert_eq!(p.velocity(), (-1, -1));
        p.reverse_x();
        assert_eq!(p.velocity(), (1, -1));
    }

    #[test]
    fn zero_velocity_rejected() {
        let err = Particle::with_velocity(0, 0, Color::Blue, 0, 1).unwrap_err();
        assert_eq!(err, Error::ZeroVelocity);
        assert!(Particle::with_velocity(0, 0, Color::Blue, 1, 0).is_err());
    }

    #[test]
    fn shape_follows_position() {
        let mut p = Particle::new(1, 2, Color::Magenta);
        p.advance();
        let s = p.shape();
        assert_eq!((s.x, s.y), (2, 3));
        assert_eq!(s.color, Color::Magenta);
        assert_eq!(s.kind, ShapeKind::Circle { diameter: 10 });
    }
}
