//! Entity state and the effects attached to it.
//!
//! Entities own their shields, buffs, and cooldown table exclusively. The
//! [`Roster`] is the authoritative collection handed to the ability system;
//! entities never reference each other.
pub mod error;
pub mod types;

pub use error::StateError;
pub use types::{
    AbilityCooldown, AbilityId, Attribute, Buff, Entity, EntityId, Expiry, ModifierKind,
    Position, Roster, Shield, StatModifier, Tick,
};
