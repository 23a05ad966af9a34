use super::{AbilityId, Expiry, Tick};
use crate::state::StateError;

/// Absorption pool attached to an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ShieldFields")
)]
pub struct Shield {
    source_ability: AbilityId,
    magnitude: f64,
    expires_at: Expiry,
}

impl Shield {
    /// Creates a shield; the magnitude must be finite and non-negative.
    pub fn new(
        source_ability: AbilityId,
        magnitude: f64,
        expires_at: Expiry,
    ) -> Result<Self, StateError> {
        if !magnitude.is_finite() || magnitude < 0.0 {
            return Err(StateError::InvalidShieldMagnitude(magnitude));
        }
        Ok(Self {
            source_ability,
            magnitude,
            expires_at,
        })
    }

    /// Shield that stays until explicitly removed.
    pub fn permanent(source_ability: AbilityId, magnitude: f64) -> Result<Self, StateError> {
        Self::new(source_ability, magnitude, Expiry::Never)
    }

    pub fn source_ability(&self) -> AbilityId {
        self.source_ability
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn expires_at(&self) -> Expiry {
        self.expires_at
    }

    pub fn is_expired(&self, now: Tick) -> bool {
        self.expires_at.is_expired(now)
    }
}

/// Deserialized form of [`Shield`]; converted through [`Shield::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ShieldFields {
    source_ability: AbilityId,
    magnitude: f64,
    expires_at: Expiry,
}

#[cfg(feature = "serde")]
impl TryFrom<ShieldFields> for Shield {
    type Error = StateError;

    fn try_from(fields: ShieldFields) -> Result<Self, Self::Error> {
        Self::new(fields.source_ability, fields.magnitude, fields.expires_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_and_nan() {
        assert!(Shield::permanent(AbilityId(0), -1.0).is_err());
        assert!(Shield::permanent(AbilityId(0), f64::INFINITY).is_err());
        assert!(Shield::permanent(AbilityId(0), 0.0).is_ok());
    }
}
