//! Range-based attack aura applied on every tick.

use tracing::{debug, trace};

use super::error::non_negative;
use super::{AbilityError, TriggerContext};
use crate::event::Event;
use crate::log::{BattleLog, Outcome};
use crate::state::{Buff, EntityId, Expiry, ModifierKind, Roster, StatModifier, StateError};

/// Buffs every other entity within `range` of the source with an attack
/// bonus lasting `duration` ticks.
///
/// There is no cooldown: each tick adds a fresh buff to every entity in range.
/// Aggregation keeps only the strongest attack modifier, so repeated buffs do
/// not compound.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "AuraFields")
)]
pub struct AuraAbility {
    name: String,
    atk_bonus: f64,
    range: f64,
    duration: u64,
}

impl AuraAbility {
    pub fn new(
        name: impl Into<String>,
        atk_bonus: f64,
        range: f64,
        duration: u64,
    ) -> Result<Self, AbilityError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AbilityError::EmptyName);
        }
        if !non_negative(atk_bonus) {
            return Err(AbilityError::InvalidAttackBonus(atk_bonus));
        }
        if !non_negative(range) {
            return Err(AbilityError::InvalidRange(range));
        }
        if duration == 0 {
            return Err(AbilityError::ZeroDuration);
        }
        Ok(Self {
            name,
            atk_bonus,
            range,
            duration,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atk_bonus(&self) -> f64 {
        self.atk_bonus
    }

    pub fn range(&self) -> f64 {
        self.range
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub(super) fn trigger(
        &self,
        ctx: &TriggerContext,
        primary: EntityId,
        event: &Event,
        roster: &mut Roster,
        log: &mut BattleLog,
    ) -> Result<(), StateError> {
        let Event::Tick = event else {
            return Ok(());
        };
        let Some(source) = roster.get(primary).map(|entity| entity.position()) else {
            return Ok(());
        };

        let expires_at = Expiry::after(ctx.now, self.duration);
        for other in roster.iter_mut().filter(|entity| entity.id() != primary) {
            let distance = source.distance_to(&other.position());
            if distance > self.range {
                trace!(ally = %other.id(), distance, range = self.range, "out of aura range");
                continue;
            }

            let modifier =
                StatModifier::new(ModifierKind::AtkUp, self.atk_bonus, expires_at, ctx.ability_id)?;
            other.add_buff(Buff::new(self.name.clone(), expires_at).with_modifier(modifier));

            debug!(
                source = %primary,
                ally = %other.id(),
                aura = %self.name,
                bonus = self.atk_bonus,
                "aura buff applied"
            );
            log.record(
                ctx.now,
                other.id(),
                event.kind(),
                self.name.clone(),
                Outcome::BuffApplied,
                format!("atk_bonus:{:.0}%", self.atk_bonus * 100.0),
            );
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AuraFields {
    name: String,
    atk_bonus: f64,
    range: f64,
    duration: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<AuraFields> for AuraAbility {
    type Error = AbilityError;

    fn try_from(fields: AuraFields) -> Result<Self, Self::Error> {
        Self::new(fields.name, fields.atk_bonus, fields.range, fields.duration)
    }
}
