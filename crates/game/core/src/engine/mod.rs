//! Ability dispatch and stat aggregation.
//!
//! The [`AbilitySystem`] owns the registered abilities, the active
//! [`GameMode`], and the [`LogicalClock`]. Events are fanned out to every
//! ability in registration order; stats are read back through
//! [`AbilitySystem::compute_stats`], which purges expired effects first.

mod clock;
mod errors;

pub use clock::LogicalClock;
pub use errors::{ClockError, DispatchError, RegistryError};

use arrayvec::ArrayVec;
use tracing::trace;

use crate::ability::{Ability, TriggerContext};
use crate::config::{EngineConfig, GameMode};
use crate::event::Event;
use crate::log::BattleLog;
use crate::state::{AbilityId, Entity, EntityId, Roster, Tick};

/// Aggregated attributes of one entity at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSnapshot {
    pub attack: f64,
    pub defense: f64,
    pub shield: f64,
}

#[derive(Clone, Debug, PartialEq)]
struct RegisteredAbility {
    id: AbilityId,
    ability: Ability,
}

/// Event dispatcher and stat aggregator.
///
/// Ability ids are registration indices local to one system, and entities key
/// their cooldowns by those ids. A roster must therefore be driven by a single
/// system: two systems dispatching over the same roster would share cooldown
/// entries for abilities registered at the same index.
#[derive(Clone, Debug, Default)]
pub struct AbilitySystem {
    abilities: ArrayVec<RegisteredAbility, { EngineConfig::MAX_ABILITIES }>,
    mode: GameMode,
    clock: LogicalClock,
    config: EngineConfig,
}

impl AbilitySystem {
    /// Creates an empty system in PVE mode at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers an ability and returns the id it will act under.
    pub fn register(&mut self, ability: impl Into<Ability>) -> Result<AbilityId, RegistryError> {
        if self.abilities.is_full() {
            return Err(RegistryError::full());
        }
        let id = AbilityId(self.abilities.len() as u16);
        let ability = ability.into();
        trace!(%id, name = ability.name(), "ability registered");
        self.abilities.push(RegisteredAbility { id, ability });
        Ok(id)
    }

    pub fn ability(&self, id: AbilityId) -> Option<&Ability> {
        self.abilities
            .iter()
            .find(|registered| registered.id == id)
            .map(|registered| &registered.ability)
    }

    /// Registered abilities in dispatch order.
    pub fn abilities(&self) -> impl Iterator<Item = (AbilityId, &Ability)> {
        self.abilities
            .iter()
            .map(|registered| (registered.id, &registered.ability))
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn clock(&self) -> &LogicalClock {
        &self.clock
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    pub fn advance(&mut self, ticks: u64) -> Tick {
        self.clock.advance(ticks)
    }

    pub fn advance_to(&mut self, tick: Tick) -> Result<Tick, ClockError> {
        self.clock.advance_to(tick)
    }

    /// Forwards `event` to every registered ability in registration order.
    ///
    /// `primary` is the entity the event is evaluated for; it must be part of
    /// `roster`, which belongs to this system. Cooldown blocks and out-of-range
    /// candidates are not errors.
    pub fn dispatch(
        &self,
        event: &Event,
        primary: EntityId,
        roster: &mut Roster,
        log: &mut BattleLog,
    ) -> Result<(), DispatchError> {
        if !roster.contains(primary) {
            return Err(DispatchError::UnknownEntity(primary));
        }

        let now = self.clock.now();
        trace!(
            event = %event.kind(),
            %primary,
            %now,
            abilities = self.abilities.len(),
            "dispatching event"
        );

        for registered in &self.abilities {
            let ctx = TriggerContext {
                ability_id: registered.id,
                now,
                mode: self.mode,
            };
            registered
                .ability
                .trigger(&ctx, primary, event, roster, log)
                .map_err(|source| DispatchError::InvalidEffect {
                    ability: registered.ability.name().to_owned(),
                    source,
                })?;
        }
        Ok(())
    }

    /// Purges expired effects on `entity`, then aggregates its attributes.
    pub fn compute_stats(&self, entity: &mut Entity) -> StatSnapshot {
        let now = self.clock.now();
        let removed = entity.cleanup_expired(now);
        if removed > 0 {
            trace!(entity = %entity.id(), removed, %now, "expired effects removed");
        }

        StatSnapshot {
            attack: entity.modified_attack_with(&self.config, self.mode, now),
            defense: entity.modified_defense_with(&self.config, self.mode, now),
            shield: entity.total_shield(now),
        }
    }

    /// Runs [`compute_stats`](Self::compute_stats) for every entity in roster order.
    pub fn compute_roster_stats(&self, roster: &mut Roster) -> Vec<(EntityId, StatSnapshot)> {
        roster
            .iter_mut()
            .map(|entity| (entity.id(), self.compute_stats(entity)))
            .collect()
    }
}
