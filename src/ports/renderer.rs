//! # Renderer Port
//!
//! Receiver of the draw intents produced by the simulation core.

use crate::core::DrawIntent;

/// Something that can display shapes.
///
/// The core never queries a renderer; it only hands over intents.
pub trait Renderer {
    /// Carry out one intent.
    fn apply(&mut self, intent: DrawIntent);

    /// Carry out a batch of intents in order.
    fn apply_all<I>(&mut self, intents: I)
    where
        I: IntoIterator<Item = DrawIntent>,
        Self: Sized,
    {
        for intent in intents {
            self.apply(intent);
        }
    }
}
