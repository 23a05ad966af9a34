//! Deterministic effect resolution for combat entities.
//!
//! `effect-core` owns the lifecycle of shields, buffs, and ability cooldowns,
//! and the rules that combine them into derived attributes. Callers build a
//! [`Roster`] of entities, register [`Ability`] values on an
//! [`AbilitySystem`], feed it [`Event`]s, and read back [`StatSnapshot`]s and
//! the [`BattleLog`]. Time is a logical clock advanced only by the caller.
pub mod ability;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod log;
pub mod state;

pub use ability::{Ability, AbilityError, AuraAbility, CritShieldAbility, TriggerContext};
pub use config::{ConfigError, EngineConfig, GameMode};
pub use engine::{
    AbilitySystem, ClockError, DispatchError, LogicalClock, RegistryError, StatSnapshot,
};
pub use error::{EngineError, ErrorSeverity, GameError};
pub use event::{Event, EventKind};
pub use log::{BattleLog, BattleLogEntry, Outcome};
pub use state::{
    AbilityCooldown, AbilityId, Attribute, Buff, Entity, EntityId, Expiry, ModifierKind,
    Position, Roster, Shield, StatModifier, StateError, Tick,
};
