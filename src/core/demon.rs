use super::entity::{Color, EntityId};
use super::intent::{Drawable, Shape, ShapeKey, ShapeKind};

/// Rendered demon size (triangle width and height).
pub const DEMON_SIZE: u32 = 40;

/// Maxwell's demon. Stationary and, for now, purely decorative: the step
/// loop never consults it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demon {
    id: EntityId,
    x: i32,
    y: i32,
    visible: bool,
}

impl Demon {
    /// Create a hidden demon at `(x, y)`.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            id: EntityId::next(),
            x,
            y,
            visible: false,
        }
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
}

impl Drawable for Demon {
    fn key(&self) -> ShapeKey {
        ShapeKey::Entity(self.id)
    }

    fn shape(&self) -> Shape {
        Shape::new(
            ShapeKind::Triangle {
                width: DEMON_SIZE,
                height: DEMON_SIZE,
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
