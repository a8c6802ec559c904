use thiserror::Error;

use crate::core::{EntityId, EntityKind};

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a container operation can fail.
///
/// The public container API never returns these directly; it records them
/// and reports the outcome through `Container::ok`. The `try_*` variants of
/// the operations hand them back to callers that want the detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The entity is not held by the container (never added, already deleted,
    /// or owned by another container).
    #[error("{kind} {id} not found in container")]
    NotFound { kind: EntityKind, id: EntityId },

    /// A hole cannot absorb a negative number of particles.
    #[error("hole capacity must be >= 0, got {0}")]
    NegativeCapacity(i32),

    /// Particle velocity components are only ever negated, never zero.
    #[error("particle velocity components must be nonzero")]
    ZeroVelocity,

    /// Color name outside the supported palette.
    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind_and_id() {
        let e = Error::NotFound {
            kind: EntityKind::Particle,
            id: EntityId::from_raw(42),
        };
        let msg = e.to_string();
        assert!(msg.contains("particle"));
        assert!(msg.contains("#42"));
    }

    #[test]
    fn capacity_error_carries_value() {
        let msg = Error::NegativeCapacity(-3).to_string();
        assert!(msg.contains("-3"));
    }

    #[test]
    fn result_type_alias_compiles() -> Result<()> {
        Ok(())
    }
}
