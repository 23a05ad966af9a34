//! Game entity and derived-attribute aggregation.
//!
//! # Aggregation
//!
//! Derived attributes are computed on demand from unexpired buffs:
//!
//! ```text
//! unexpired buffs → modifiers → mode cap (per modifier) → max per kind → base × Π(1 + m)
//! ```
//!
//! Modifiers of the same kind never add up; the strongest one wins. Kinds are
//! applied in [`ModifierKind`] order, so results are deterministic.

use std::collections::BTreeMap;

use super::{
    AbilityCooldown, AbilityId, Attribute, Buff, EntityId, ModifierKind, Position, Shield, Tick,
};
use crate::config::{EngineConfig, GameMode};
use crate::state::StateError;

/// A combatant with its own shields, buffs, and cooldown table.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "EntityFields")
)]
pub struct Entity {
    id: EntityId,
    base_atk: f64,
    base_def: f64,
    position: Position,
    shields: Vec<Shield>,
    buffs: Vec<Buff>,
    cooldowns: BTreeMap<AbilityId, AbilityCooldown>,
}

impl Entity {
    /// Creates an entity with no effects.
    ///
    /// Base stats must be finite and non-negative; the position must be finite.
    pub fn new(
        id: EntityId,
        base_atk: f64,
        base_def: f64,
        position: Position,
    ) -> Result<Self, StateError> {
        for (attribute, value) in [(Attribute::Attack, base_atk), (Attribute::Defense, base_def)] {
            if !value.is_finite() || value < 0.0 {
                return Err(StateError::InvalidBaseStat {
                    entity: id,
                    attribute,
                    value,
                });
            }
        }
        if !position.is_finite() {
            return Err(StateError::InvalidPosition {
                entity: id,
                x: position.x,
                y: position.y,
            });
        }

        Ok(Self {
            id,
            base_atk,
            base_def,
            position,
            shields: Vec::new(),
            buffs: Vec::new(),
            cooldowns: BTreeMap::new(),
        })
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn base_atk(&self) -> f64 {
        self.base_atk
    }

    pub fn base_def(&self) -> f64 {
        self.base_def
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn shields(&self) -> &[Shield] {
        &self.shields
    }

    pub fn buffs(&self) -> &[Buff] {
        &self.buffs
    }

    pub fn add_shield(&mut self, shield: Shield) {
        self.shields.push(shield);
    }

    pub fn add_buff(&mut self, buff: Buff) {
        self.buffs.push(buff);
    }

    pub fn cooldown(&self, ability: AbilityId) -> Option<&AbilityCooldown> {
        self.cooldowns.get(&ability)
    }

    /// Returns the cooldown entry for `ability`, creating it on first use.
    pub fn cooldown_entry(&mut self, ability: AbilityId, duration: u64) -> &mut AbilityCooldown {
        self.cooldowns
            .entry(ability)
            .or_insert_with(|| AbilityCooldown::new(ability, duration))
    }

    // ------------------------------------------------------------------------
    // Derived attributes
    // ------------------------------------------------------------------------

    /// Sum of all shields still active at `now`.
    pub fn total_shield(&self, now: Tick) -> f64 {
        self.shields
            .iter()
            .filter(|shield| !shield.is_expired(now))
            .map(Shield::magnitude)
            .sum()
    }

    /// Strongest post-cap magnitude per modifier kind among active buffs.
    pub fn winning_modifiers(&self, cap: Option<f64>, now: Tick) -> BTreeMap<ModifierKind, f64> {
        let mut winners = BTreeMap::new();
        let active = self
            .buffs
            .iter()
            .filter(|buff| !buff.is_expired(now))
            .flat_map(Buff::modifiers);

        for modifier in active {
            let applied = modifier.capped_magnitude(cap);
            let best = winners.entry(modifier.kind()).or_insert(0.0_f64);
            *best = best.max(applied);
        }

        winners
    }

    /// Attack after buffs, using the default mode caps.
    pub fn modified_attack(&self, mode: GameMode, now: Tick) -> f64 {
        self.modified_attack_with(&EngineConfig::default(), mode, now)
    }

    pub fn modified_attack_with(&self, config: &EngineConfig, mode: GameMode, now: Tick) -> f64 {
        self.modified(
            Attribute::Attack,
            self.base_atk,
            config.modifier_cap(mode),
            now,
        )
    }

    /// Defense after buffs, using the default mode caps.
    pub fn modified_defense(&self, mode: GameMode, now: Tick) -> f64 {
        self.modified_defense_with(&EngineConfig::default(), mode, now)
    }

    pub fn modified_defense_with(&self, config: &EngineConfig, mode: GameMode, now: Tick) -> f64 {
        self.modified(
            Attribute::Defense,
            self.base_def,
            config.modifier_cap(mode),
            now,
        )
    }

    fn modified(&self, attribute: Attribute, base: f64, cap: Option<f64>, now: Tick) -> f64 {
        self.winning_modifiers(cap, now)
            .into_iter()
            .filter(|(kind, _)| kind.target() == attribute)
            .fold(base, |value, (_, magnitude)| value * (1.0 + magnitude))
    }

    /// Drops every shield and buff that has expired at `now`.
    ///
    /// Returns the number of removed entries.
    pub fn cleanup_expired(&mut self, now: Tick) -> usize {
        let before = self.shields.len() + self.buffs.len();
        self.shields.retain(|shield| !shield.is_expired(now));
        self.buffs.retain(|buff| !buff.is_expired(now));
        before - (self.shields.len() + self.buffs.len())
    }
}

/// Deserialized form of [`Entity`]. Base stats and position are validated by
/// [`Entity::new`]; cooldown entries are re-keyed by their own ability id.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EntityFields {
    id: EntityId,
    base_atk: f64,
    base_def: f64,
    position: Position,
    #[serde(default)]
    shields: Vec<Shield>,
    #[serde(default)]
    buffs: Vec<Buff>,
    #[serde(default)]
    cooldowns: BTreeMap<AbilityId, AbilityCooldown>,
}

#[cfg(feature = "serde")]
impl TryFrom<EntityFields> for Entity {
    type Error = StateError;

    fn try_from(fields: EntityFields) -> Result<Self, Self::Error> {
        let mut entity = Entity::new(
            fields.id,
            fields.base_atk,
            fields.base_def,
            fields.position,
        )?;
        entity.shields = fields.shields;
        entity.buffs = fields.buffs;
        entity.cooldowns = fields
            .cooldowns
            .into_values()
            .map(|cooldown| (cooldown.ability_id, cooldown))
            .collect();
        Ok(entity)
    }
}
