//! Scenario definitions: entities, abilities, and a script of steps.
//!
//! Scenarios describe a deterministic session in data so the same run can be
//! replayed by tests and by the CLI. Ids in scenario files are plain integers.

mod bundled;
mod runner;

pub use bundled::BundledScenarios;
pub use runner::{ExpectationResult, ScenarioReport, ScenarioRunner, StatField};

use effect_core::{
    Ability, AbilityError, AuraAbility, CritShieldAbility, Entity, EntityId, Event, GameMode,
    ModifierKind, Position, StateError,
};
use serde::{Deserialize, Serialize};

/// Complete scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub mode: GameMode,
    pub entities: Vec<EntitySpec>,
    #[serde(default)]
    pub abilities: Vec<AbilitySpec>,
    #[serde(default)]
    pub steps: Vec<StepSpec>,
    #[serde(default)]
    pub expectations: Vec<Expectation>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntitySpec {
    pub id: u32,
    pub base_atk: f64,
    pub base_def: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl EntitySpec {
    pub fn build(&self) -> Result<Entity, StateError> {
        Entity::new(
            EntityId(self.id),
            self.base_atk,
            self.base_def,
            Position::new(self.x, self.y),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AbilitySpec {
    CritShield {
        shield_value: f64,
        #[serde(default)]
        cooldown: u64,
    },
    Aura {
        name: String,
        atk_bonus: f64,
        range: f64,
        duration: u64,
    },
}

impl AbilitySpec {
    pub fn build(&self) -> Result<Ability, AbilityError> {
        match self {
            AbilitySpec::CritShield {
                shield_value,
                cooldown,
            } => Ok(CritShieldAbility::new(*shield_value, *cooldown)?.into()),
            AbilitySpec::Aura {
                name,
                atk_bonus,
                range,
                duration,
            } => Ok(AuraAbility::new(name.clone(), *atk_bonus, *range, *duration)?.into()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EventSpec {
    Crit { attacker: u32 },
    Tick,
    DamageTaken { defender: u32, damage: f64 },
}

impl From<EventSpec> for Event {
    fn from(spec: EventSpec) -> Self {
        match spec {
            EventSpec::Crit { attacker } => Event::Crit {
                attacker: EntityId(attacker),
            },
            EventSpec::Tick => Event::Tick,
            EventSpec::DamageTaken { defender, damage } => Event::DamageTaken {
                defender: EntityId(defender),
                damage,
            },
        }
    }
}

/// One scripted step, executed in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepSpec {
    /// Dispatch `event` with `primary` as the evaluated entity.
    Dispatch { event: EventSpec, primary: u32 },
    /// Advance the logical clock by this many ticks.
    Advance(u64),
    /// Switch the game mode.
    SetMode(GameMode),
    /// Attach a single-modifier buff directly, bypassing abilities.
    ApplyBuff {
        entity: u32,
        name: String,
        kind: ModifierKind,
        magnitude: f64,
        duration: u64,
    },
}

/// Stats to check for one entity after all steps ran. Unset fields are not
/// checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Expectation {
    pub entity: u32,
    #[serde(default)]
    pub attack: Option<f64>,
    #[serde(default)]
    pub defense: Option<f64>,
    #[serde(default)]
    pub shield: Option<f64>,
}
