//! Event-reactive abilities.
//!
//! [`Ability`] is a closed set of variants. [`Ability::trigger`] matches on the
//! variant and each variant matches on the events it reacts to; any other
//! combination is a silent no-op. Outcomes are observable only through the
//! battle log and the entities' state afterwards.

mod aura;
mod crit_shield;
mod error;

pub use aura::AuraAbility;
pub use crit_shield::CritShieldAbility;
pub use error::AbilityError;

use crate::config::GameMode;
use crate::event::Event;
use crate::log::BattleLog;
use crate::state::{AbilityId, EntityId, Roster, StateError, Tick};

/// Per-trigger inputs supplied by the ability system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerContext {
    /// Identity the triggering ability was registered under.
    pub ability_id: AbilityId,
    pub now: Tick,
    pub mode: GameMode,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    CritShield(CritShieldAbility),
    Aura(AuraAbility),
}

impl Ability {
    pub fn name(&self) -> &str {
        match self {
            Ability::CritShield(ability) => ability.name(),
            Ability::Aura(ability) => ability.name(),
        }
    }

    /// Reacts to `event` on behalf of `primary`.
    ///
    /// Errors only when an effect cannot be built from the ability's own
    /// parameters; gameplay non-application is reported through `log`.
    pub fn trigger(
        &self,
        ctx: &TriggerContext,
        primary: EntityId,
        event: &Event,
        roster: &mut Roster,
        log: &mut BattleLog,
    ) -> Result<(), StateError> {
        match self {
            Ability::CritShield(ability) => ability.trigger(ctx, primary, event, roster, log),
            Ability::Aura(ability) => ability.trigger(ctx, primary, event, roster, log),
        }
    }
}

impl From<CritShieldAbility> for Ability {
    fn from(ability: CritShieldAbility) -> Self {
        Ability::CritShield(ability)
    }
}

impl From<AuraAbility> for Ability {
    fn from(ability: AuraAbility) -> Self {
        Ability::Aura(ability)
    }
}
