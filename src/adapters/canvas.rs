//! # Canvas Adapter
//!
//! Retained list of the shapes currently on display.
//!
//! Owned by whoever drives the simulation and dropped with it; there is no
//! global drawing surface. The window adapter paints it every frame, and
//! headless runs can inspect it directly.

use crate::core::{DrawIntent, Shape, ShapeKey};
use crate::ports::Renderer;

/// Shapes on display, back to front.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Canvas {
    shapes: Vec<(ShapeKey, Shape)>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed shapes in paint order (earliest shown first).
    pub fn shapes(&self) -> impl Iterator<Item = &(ShapeKey, Shape)> {
        self.shapes.iter()
    }

    pub fn get(&self, key: ShapeKey) -> Option<&Shape> {
        self.shapes.iter().find(|(k, _)| *k == key).map(|(_, s)| s)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    fn position(&self, key: ShapeKey) -> Option<usize> {
        self.shapes.iter().position(|(k, _)| *k == key)
    }
}

impl Renderer for Canvas {
    fn apply(&mut self, intent: DrawIntent) {
        match intent {
            DrawIntent::Show { key, shape } => match self.position(key) {
                Some(i) => self.shapes[i].1 = shape,
                None => self.shapes.push((key, shape)),
            },
            DrawIntent::Move { key, x, y } => match self.position(key) {
                Some(i) => {
                    self.shapes[i].1.x = x;
                    self.shapes[i].1.y = y;
                }
                None => log::trace!("move for undisplayed {:?}", key),
            },
            DrawIntent::Hide { key } => {
                if let Some(i) = self.position(key) {
                    self.shapes.remove(i);
                }
            }
        }
    }
}
