//! # Entity
//!
//! Shared vocabulary of the simulation entities: identity, kind and color.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::Error;

/// Process-wide counter so ids from different containers never collide.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque handle to an entity held by a container.
///
/// Ids are handed out by `add_*` operations and never reused, so a stale or
/// foreign id is simply a non-member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct EntityId(u64);

impl EntityId {
    /// Allocate a fresh id.
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Wrap a raw value. Useful for tests and for ids kept outside the process.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The three kinds of entities a container holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EntityKind {
    Demon,
    Particle,
    Hole,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::Demon => "demon",
            EntityKind::Particle => "particle",
            EntityKind::Hole => "hole",
        };
        f.write_str(name)
    }
}

/// Closed palette understood by the renderer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Black,
}

impl Color {
    /// Every supported color, in palette order.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Yellow,
        Color::Blue,
        Color::Green,
        Color::Magenta,
        Color::Black,
    ];

    /// Color used when a caller explicitly asks for a lenient lookup.
    pub const FALLBACK: Color = Color::Blue;

    /// Lower-case palette name.
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Black => "black",
        }
    }

    /// Lenient lookup: unknown names map to [`Color::FALLBACK`].
    ///
    /// Strict callers should use `str::parse::<Color>()` instead.
    pub fn from_name_or_fallback(name: &str) -> Color {
        match name.parse() {
            Ok(color) => color,
            Err(_) => {
                log::warn!(
                    "unknown color {:?}, falling back to {}",
                    name,
                    Color::FALLBACK
                );
                Color::FALLBACK
            }
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Color::ALL
            .into_iter()
            .find(|c| c.name() == wanted)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}
