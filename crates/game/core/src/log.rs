//! Append-only record of ability outcomes.
//!
//! Entries carry a time relative to the tick the log was started at, so a log
//! reads the same no matter when in a session it was opened.

use std::fmt;

use crate::event::EventKind;
use crate::state::{EntityId, Tick};

/// What an ability did in response to an event.
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
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// An effect was attached to the acting entity.
    EffectApplied,
    /// A buff was attached to another entity.
    BuffApplied,
    /// The ability matched but its cooldown suppressed it.
    BlockedByCooldown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLogEntry {
    /// Ticks since the log was started.
    pub relative_time: u64,
    pub entity_id: EntityId,
    pub event: EventKind,
    pub ability: String,
    pub outcome: Outcome,
    pub detail: String,
}

impl fmt::Display for BattleLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "t:{}, entity:{}, evt:{}, ability:{}, result:{}, detail:{}",
            self.relative_time,
            self.entity_id.0,
            self.event,
            self.ability,
            self.outcome,
            self.detail
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleLog {
    start: Tick,
    entries: Vec<BattleLogEntry>,
}

impl BattleLog {
    /// Log anchored at tick zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Log whose relative times are measured from `start`.
    pub fn starting_at(start: Tick) -> Self {
        Self {
            start,
            entries: Vec::new(),
        }
    }

    pub fn start(&self) -> Tick {
        self.start
    }

    pub fn record(
        &mut self,
        now: Tick,
        entity_id: EntityId,
        event: EventKind,
        ability: impl Into<String>,
        outcome: Outcome,
        detail: impl Into<String>,
    ) {
        self.entries.push(BattleLogEntry {
            relative_time: now.since(self.start),
            entity_id,
            event,
            ability: ability.into(),
            outcome,
            detail: detail.into(),
        });
    }

    pub fn entries(&self) -> &[BattleLogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn for_entity(&self, entity_id: EntityId) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.entity_id == entity_id)
    }

    pub fn with_outcome(&self, outcome: Outcome) -> impl Iterator<Item = &BattleLogEntry> {
        self.entries
            .iter()
            .filter(move |entry| entry.outcome == outcome)
    }
}
