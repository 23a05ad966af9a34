//! Ability construction errors.

use crate::error::{ErrorSeverity, GameError};

/// Rejected ability parameters.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityError {
    #[error("ability name must not be empty")]
    EmptyName,

    #[error("shield value must be finite and non-negative (got {0})")]
    InvalidShieldValue(f64),

    #[error("attack bonus must be finite and non-negative (got {0})")]
    InvalidAttackBonus(f64),

    #[error("range must be finite and non-negative (got {0})")]
    InvalidRange(f64),

    #[error("effect duration must be at least one tick")]
    ZeroDuration,
}

impl GameError for AbilityError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use AbilityError::*;
        match self {
            EmptyName => "ABILITY_EMPTY_NAME",
            InvalidShieldValue(_) => "ABILITY_INVALID_SHIELD_VALUE",
            InvalidAttackBonus(_) => "ABILITY_INVALID_ATTACK_BONUS",
            InvalidRange(_) => "ABILITY_INVALID_RANGE",
            ZeroDuration => "ABILITY_ZERO_DURATION",
        }
    }
}

/// Accepts finite, non-negative values.
pub(crate) fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
