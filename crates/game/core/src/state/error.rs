//! State construction errors.
//!
//! Raised when an entity or effect would be created with values that make no
//! sense for aggregation (negative or non-finite magnitudes, bad coordinates).
//! Deserialization goes through the same constructors and reports these too.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{Attribute, EntityId};

/// Errors that occur while building entities and their effects.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// A base attribute is negative or not a finite number.
    #[error("entity {entity} has invalid base {attribute}: {value}")]
    InvalidBaseStat {
        entity: EntityId,
        attribute: Attribute,
        value: f64,
    },

    /// Position contains NaN or infinite coordinates.
    #[error("entity {entity} has a non-finite position ({x}, {y})")]
    InvalidPosition { entity: EntityId, x: f64, y: f64 },

    /// Shield magnitude is negative or not a finite number.
    #[error("shield magnitude must be finite and non-negative (got {0})")]
    InvalidShieldMagnitude(f64),

    /// Modifier magnitude is not a finite number.
    #[error("modifier magnitude must be finite (got {0})")]
    InvalidModifierMagnitude(f64),

    /// A buff must count at least one application.
    #[error("buff stack count must be at least 1 (got {0})")]
    InvalidStackCount(u32),

    /// Two entities in the same roster share an id.
    #[error("entity {0} is already present in the roster")]
    DuplicateEntity(EntityId),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            InvalidBaseStat { .. } => "STATE_INVALID_BASE_STAT",
            InvalidPosition { .. } => "STATE_INVALID_POSITION",
            InvalidShieldMagnitude(_) => "STATE_INVALID_SHIELD_MAGNITUDE",
            InvalidModifierMagnitude(_) => "STATE_INVALID_MODIFIER_MAGNITUDE",
            InvalidStackCount(_) => "STATE_INVALID_STACK_COUNT",
            DuplicateEntity(_) => "STATE_DUPLICATE_ENTITY",
        }
    }
}
