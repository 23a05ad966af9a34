//! Common error infrastructure for effect-core.
//!
//! Gameplay outcomes (a cooldown blocking a trigger, an ally out of aura
//! range) are never errors; they are recorded in the battle log. Errors here
//! cover API misuse only: invalid construction parameters or configuration,
//! registry overflow, clock regression, and dispatching for an entity that is
//! not in the roster.
//!
//! Domain-specific errors live next to the code that raises them; this module
//! holds the shared classification and the umbrella [`EngineError`].

use crate::ability::AbilityError;
use crate::config::ConfigError;
use crate::engine::{ClockError, DispatchError, RegistryError};
use crate::state::StateError;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with same or alternative input.
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    Validation,

    /// Internal error - unexpected state inconsistency.
    Internal,

    /// Fatal error - state corrupted, cannot continue.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all effect-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Any error surfaced by the engine API.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Clock(#[from] ClockError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::State(e) => e.severity(),
            EngineError::Ability(e) => e.severity(),
            EngineError::Config(e) => e.severity(),
            EngineError::Registry(e) => e.severity(),
            EngineError::Clock(e) => e.severity(),
            EngineError::Dispatch(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::State(e) => e.error_code(),
            EngineError::Ability(e) => e.error_code(),
            EngineError::Config(e) => e.error_code(),
            EngineError::Registry(e) => e.error_code(),
            EngineError::Clock(e) => e.error_code(),
            EngineError::Dispatch(e) => e.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EntityId, Tick};

    #[test]
    fn umbrella_delegates_classification() {
        let error: EngineError = DispatchError::UnknownEntity(EntityId(7)).into();
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "DISPATCH_UNKNOWN_ENTITY");

        let error: EngineError = ClockError::Regression {
            now: Tick(5),
            requested: Tick(1),
        }
        .into();
        assert!(!error.severity().is_internal());
        assert_eq!(error.to_string(), "clock cannot move backwards from 5 to 1");
    }
}
