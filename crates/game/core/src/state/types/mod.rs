pub mod buff;
pub mod common;
pub mod cooldown;
pub mod entity;
pub mod modifier;
pub mod roster;
pub mod shield;

pub use buff::Buff;
pub use common::{AbilityId, EntityId, Expiry, Position, Tick};
pub use cooldown::AbilityCooldown;
pub use entity::Entity;
pub use modifier::{Attribute, ModifierKind, StatModifier};
pub use roster::Roster;
pub use shield::Shield;
