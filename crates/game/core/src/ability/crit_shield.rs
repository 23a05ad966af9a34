//! Self-shield granted when the owner lands a critical hit.

use tracing::debug;

use super::error::non_negative;
use super::{AbilityError, TriggerContext};
use crate::event::Event;
use crate::log::{BattleLog, Outcome};
use crate::state::{EntityId, Roster, Shield, StateError};

/// Grants a permanent shield to the attacker on each critical hit, optionally
/// gated by a cooldown.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CritShieldFields")
)]
pub struct CritShieldAbility {
    shield_value: f64,
    cooldown_duration: u64,
}

impl CritShieldAbility {
    pub const NAME: &'static str = "CRIT_SHIELD";

    /// `cooldown_duration` of zero disables the gate.
    pub fn new(shield_value: f64, cooldown_duration: u64) -> Result<Self, AbilityError> {
        if !non_negative(shield_value) {
            return Err(AbilityError::InvalidShieldValue(shield_value));
        }
        Ok(Self {
            shield_value,
            cooldown_duration,
        })
    }

    pub fn name(&self) -> &str {
        Self::NAME
    }

    pub fn shield_value(&self) -> f64 {
        self.shield_value
    }

    pub fn cooldown_duration(&self) -> u64 {
        self.cooldown_duration
    }

    pub(super) fn trigger(
        &self,
        ctx: &TriggerContext,
        primary: EntityId,
        event: &Event,
        roster: &mut Roster,
        log: &mut BattleLog,
    ) -> Result<(), StateError> {
        let Event::Crit { attacker } = *event else {
            return Ok(());
        };
        if attacker != primary {
            return Ok(());
        }
        let Some(entity) = roster.get_mut(primary) else {
            return Ok(());
        };

        let cooldown = entity.cooldown_entry(ctx.ability_id, self.cooldown_duration);
        if self.cooldown_duration > 0 && cooldown.is_on_cooldown(ctx.now) {
            debug!(
                entity = %primary,
                ability = Self::NAME,
                ready_at = ?cooldown.ready_at(ctx.now),
                "trigger blocked by cooldown"
            );
            log.record(
                ctx.now,
                primary,
                event.kind(),
                Self::NAME,
                Outcome::BlockedByCooldown,
                "",
            );
            return Ok(());
        }

        let shield = Shield::permanent(ctx.ability_id, self.shield_value)?;
        cooldown.trigger(ctx.now);
        entity.add_shield(shield);

        debug!(entity = %primary, value = self.shield_value, "shield applied");
        log.record(
            ctx.now,
            primary,
            event.kind(),
            Self::NAME,
            Outcome::EffectApplied,
            format!("shield:{:.0}", self.shield_value),
        );
        Ok(())
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CritShieldFields {
    shield_value: f64,
    cooldown_duration: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<CritShieldFields> for CritShieldAbility {
    type Error = AbilityError;

    fn try_from(fields: CritShieldFields) -> Result<Self, Self::Error> {
        Self::new(fields.shield_value, fields.cooldown_duration)
    }
}
