//! Typed stat modifiers carried by buffs.

use super::{AbilityId, Expiry, Tick};
use crate::state::StateError;

/// Derived attribute a modifier contributes to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Attack,
    Defense,
}

/// Kind of a stat modifier.
///
/// Variant order is the order in which winning magnitudes are applied during
/// aggregation, so it must stay stable.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ModifierKind {
    /// Percentage increase to attack.
    AtkUp,
    /// Percentage increase to defense.
    DefUp,
}

impl ModifierKind {
    /// Attribute this kind scales.
    pub const fn target(self) -> Attribute {
        match self {
            ModifierKind::AtkUp => Attribute::Attack,
            ModifierKind::DefUp => Attribute::Defense,
        }
    }
}

/// A single typed numeric contribution to a derived attribute.
///
/// Magnitudes are fractions: `0.10` is +10%.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StatModifierFields")
)]
pub struct StatModifier {
    kind: ModifierKind,
    magnitude: f64,
    expires_at: Expiry,
    source_ability: AbilityId,
}

impl StatModifier {
    pub fn new(
        kind: ModifierKind,
        magnitude: f64,
        expires_at: Expiry,
        source_ability: AbilityId,
    ) -> Result<Self, StateError> {
        if !magnitude.is_finite() {
            return Err(StateError::InvalidModifierMagnitude(magnitude));
        }
        Ok(Self {
            kind,
            magnitude,
            expires_at,
            source_ability,
        })
    }

    pub fn kind(&self) -> ModifierKind {
        self.kind
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn expires_at(&self) -> Expiry {
        self.expires_at
    }

    pub fn source_ability(&self) -> AbilityId {
        self.source_ability
    }

    pub fn is_expired(&self, now: Tick) -> bool {
        self.expires_at.is_expired(now)
    }

    /// Magnitude after an optional per-modifier cap.
    pub fn capped_magnitude(&self, cap: Option<f64>) -> f64 {
        match cap {
            Some(cap) => self.magnitude.min(cap),
            None => self.magnitude,
        }
    }

    /// Same modifier bound to a different expiry. Used by buffs to keep
    /// every modifier aligned with the container.
    pub(crate) fn with_expiry(mut self, expires_at: Expiry) -> Self {
        self.expires_at = expires_at;
        self
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct StatModifierFields {
    kind: ModifierKind,
    magnitude: f64,
    expires_at: Expiry,
    source_ability: AbilityId,
}

#[cfg(feature = "serde")]
impl TryFrom<StatModifierFields> for StatModifier {
    type Error = StateError;

    fn try_from(fields: StatModifierFields) -> Result<Self, Self::Error> {
        Self::new(
            fields.kind,
            fields.magnitude,
            fields.expires_at,
            fields.source_ability,
        )
    }
}
