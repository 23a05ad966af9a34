use super::{AbilityId, Tick};

/// Per-(entity, ability) cooldown gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityCooldown {
    pub ability_id: AbilityId,
    pub last_triggered_at: Option<Tick>,
    pub cooldown_duration: u64,
}

impl AbilityCooldown {
    pub fn new(ability_id: AbilityId, cooldown_duration: u64) -> Self {
        Self {
            ability_id,
            last_triggered_at: None,
            cooldown_duration,
        }
    }

    /// True while fewer than `cooldown_duration` ticks have elapsed since the
    /// last trigger. Never-triggered entries are always ready.
    pub fn is_on_cooldown(&self, now: Tick) -> bool {
        match self.last_triggered_at {
            Some(last) => now.since(last) < self.cooldown_duration,
            None => false,
        }
    }

    /// First tick at which the gate opens again, if it is currently closed.
    pub fn ready_at(&self, now: Tick) -> Option<Tick> {
        if !self.is_on_cooldown(now) {
            return None;
        }
        self.last_triggered_at
            .map(|last| last + self.cooldown_duration)
    }

    pub fn trigger(&mut self, now: Tick) {
        self.last_triggered_at = Some(now);
    }
}
