//! Error types for the ability system.

use crate::config::EngineConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, StateError, Tick};

/// Registration failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("ability registry is full (max: {max})")]
    Full { max: usize },
}

impl RegistryError {
    pub(crate) const fn full() -> Self {
        Self::Full {
            max: EngineConfig::MAX_ABILITIES,
        }
    }
}

impl GameError for RegistryError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "REGISTRY_FULL"
    }
}

/// Logical clock misuse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("clock cannot move backwards from {now} to {requested}")]
    Regression { now: Tick, requested: Tick },
}

impl GameError for ClockError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        "CLOCK_REGRESSION"
    }
}

/// Errors surfaced while dispatching an event.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DispatchError {
    #[error("entity {0} is not in the roster")]
    UnknownEntity(EntityId),

    #[error("ability '{ability}' produced an invalid effect: {source}")]
    InvalidEffect {
        ability: String,
        #[source]
        source: StateError,
    },
}

impl GameError for DispatchError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DispatchError::UnknownEntity(_) => ErrorSeverity::Validation,
            DispatchError::InvalidEffect { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::UnknownEntity(_) => "DISPATCH_UNKNOWN_ENTITY",
            DispatchError::InvalidEffect { .. } => "DISPATCH_INVALID_EFFECT",
        }
    }
}
