//! Named, expiring bundles of stat modifiers.

use super::{Expiry, StatModifier, Tick};
#[cfg(feature = "serde")]
use crate::state::StateError;

/// Time-bounded container of stat modifiers.
///
/// Every modifier held by a buff shares the buff's expiry; [`Buff::with_modifier`]
/// stamps it on insertion. `stack_count` starts at 1 and is a passive counter:
/// aggregation never reads it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "BuffFields")
)]
pub struct Buff {
    name: String,
    modifiers: Vec<StatModifier>,
    expires_at: Expiry,
    stack_count: u32,
}

impl Buff {
    pub fn new(name: impl Into<String>, expires_at: Expiry) -> Self {
        Self {
            name: name.into(),
            modifiers: Vec::new(),
            expires_at,
            stack_count: 1,
        }
    }

    /// Adds a modifier, aligning its expiry with the buff.
    #[must_use]
    pub fn with_modifier(mut self, modifier: StatModifier) -> Self {
        self.modifiers.push(modifier.with_expiry(self.expires_at));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn modifiers(&self) -> &[StatModifier] {
        &self.modifiers
    }

    pub fn expires_at(&self) -> Expiry {
        self.expires_at
    }

    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Records one more application of the same buff.
    pub fn add_stack(&mut self) {
        self.stack_count = self.stack_count.saturating_add(1);
    }

    pub fn is_expired(&self, now: Tick) -> bool {
        self.expires_at.is_expired(now)
    }
}

/// Deserialized form of [`Buff`]. Conversion rejects a zero stack count and
/// restamps every modifier with the buff's expiry.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BuffFields {
    name: String,
    modifiers: Vec<StatModifier>,
    expires_at: Expiry,
    stack_count: u32,
}

#[cfg(feature = "serde")]
impl TryFrom<BuffFields> for Buff {
    type Error = StateError;

    fn try_from(fields: BuffFields) -> Result<Self, Self::Error> {
        if fields.stack_count == 0 {
            return Err(StateError::InvalidStackCount(fields.stack_count));
        }
        let buff = fields
            .modifiers
            .into_iter()
            .fold(Buff::new(fields.name, fields.expires_at), Buff::with_modifier);
        Ok(Self {
            stack_count: fields.stack_count,
            ..buff
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AbilityId, ModifierKind};

    #[test]
    fn modifiers_inherit_buff_expiry() {
        let modifier =
            StatModifier::new(ModifierKind::AtkUp, 0.1, Expiry::Never, AbilityId(1)).unwrap();
        let buff = Buff::new("AURA", Expiry::At(Tick(50))).with_modifier(modifier);

        assert_eq!(buff.modifiers().len(), 1);
        assert_eq!(buff.modifiers()[0].expires_at(), Expiry::At(Tick(50)));
        assert_eq!(buff.stack_count(), 1);
    }

    #[test]
    fn stack_count_is_passive() {
        let mut buff = Buff::new("AURA", Expiry::Never);
        buff.add_stack();
        assert_eq!(buff.stack_count(), 2);
        assert!(buff.modifiers().is_empty());
    }
}
