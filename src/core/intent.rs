//! # Draw intents
//!
//! What the simulation asks of a renderer. The core only ever produces these
//! values; it never draws.

use super::entity::{Color, EntityId};

/// Geometry of a drawable shape, in pixels.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShapeKind {
    /// Circle inscribed in a `diameter` square whose top-left corner is the shape position.
    Circle { diameter: u32 },
    /// Axis-aligned square anchored at its top-left corner.
    Square { size: u32 },
    /// Isosceles triangle with its apex at the shape position, pointing up.
    Triangle { width: u32, height: u32 },
}

/// A positioned, colored shape.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Shape {
    pub kind: ShapeKind,
    pub x: i32,
    pub y: i32,
    pub color: Color,
}

impl Shape {
    pub fn new(kind: ShapeKind, x: i32, y: i32, color: Color) -> Self {
        Self { kind, x, y, color }
    }
}

/// Identifies a shape on the drawing surface.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ShapeKey {
    /// The container's background box.
    Background,
    /// A demon, particle or hole.
    Entity(EntityId),
}

/// A single request to the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawIntent {
    /// Start displaying `shape` under `key`.
    Show { key: ShapeKey, shape: Shape },
    /// Reposition the shape displayed under `key`.
    Move { key: ShapeKey, x: i32, y: i32 },
    /// Stop displaying the shape under `key`.
    Hide { key: ShapeKey },
}

impl DrawIntent {
    /// The shape this intent addresses.
    pub fn key(&self) -> ShapeKey {
        match *self {
            DrawIntent::Show { key, .. } | DrawIntent::Move { key, .. } | DrawIntent::Hide { key } => {
                key
            }
        }
    }
}

/// An entity that can be shown on, and hidden from, the drawing surface.
///
/// Implementors only track their own visibility flag; the provided methods
/// turn flag changes into intents, so repeated calls emit nothing.
pub trait Drawable {
    /// Key the renderer files this entity under.
    fn key(&self) -> ShapeKey;

    /// Shape at the entity's current position.
    fn shape(&self) -> Shape;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    /// Become visible, queueing a `Show` if the entity was hidden.
    fn make_visible(&mut self, intents: &mut Vec<DrawIntent>) {
        if !self.is_visible() {
            self.set_visible(true);
            intents.push(DrawIntent::Show {
                key: self.key(),
                shape: self.shape(),
            });
        }
    }

    /// Become invisible, queueing a `Hide` if the entity was shown.
    fn make_invisible(&mut self, intents: &mut Vec<DrawIntent>) {
        if self.is_visible() {
            self.set_visible(false);
            intents.push(DrawIntent::Hide { key: self.key() });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Dot {
        visible: bool,
    }

    impl Drawable for Dot {
        fn key(&self) -> ShapeKey {
            ShapeKey::Background
        }

        fn shape(&self) -> Shape {
            Shape::new(ShapeKind::Square { size: 4 }, 1, 2, Color::Red)
        }

        fn is_visible(&self) -> bool {
            self.visible
        }

        fn set_visible(&mut self, visible: bool) {
            self.visible = visible;
        }
    }

    #[test]
    fn show_and_hide_emit_once() {
        let mut dot = Dot { visible: false };
        let mut intents = Vec::new();

        dot.make_visible(&mut intents);
        dot.make_visible(&mut intents);
        assert_eq!(intents.len(), 1);
        assert!(matches!(intents[0], DrawIntent::Show { .. }));

        dot.make_invisible(&mut intents);
        dot.make_invisible(&mut intents);
        assert_eq!(intents.len(), 2);
        assert_eq!(intents[1], DrawIntent::Hide { key: ShapeKey::Background });
    }

    #[test]
    fn intent_key_is_shared_by_all_variants() {
        let key = ShapeKey::Entity(EntityId::from_raw(3));
        let shape = Shape::new(ShapeKind::Circle { diameter: 10 }, 0, 0, Color::Blue);
        assert_eq!(DrawIntent::Show { key, shape }.key(), key);
        assert_eq!(DrawIntent::Move { key, x: 1, y: 1 }.key(), key);
        assert_eq!(DrawIntent::Hide { key }.key(), key);
    }
}
