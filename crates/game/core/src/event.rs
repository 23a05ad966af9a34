//! Gameplay events fed to the ability system.

use crate::state::EntityId;

/// Discrete gameplay event.
///
/// Abilities match on the variants they care about; every other combination
/// is a no-op, so adding a variant here never changes existing abilities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event {
    /// `attacker` landed a critical hit.
    Crit { attacker: EntityId },
    /// Periodic heartbeat with no payload.
    Tick,
    /// `defender` took `damage`. No ability consumes this yet.
    DamageTaken { defender: EntityId, damage: f64 },
}

/// Payload-free discriminant of [`Event`], used in log entries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    OnCrit,
    Tick,
    OnDamageTaken,
}

impl Event {
    pub const fn kind(&self) -> EventKind {
        match self {
            Event::Crit { .. } => EventKind::OnCrit,
            Event::Tick => EventKind::Tick,
            Event::DamageTaken { .. } => EventKind::OnDamageTaken,
        }
    }
}
