use super::ClockError;
use crate::state::Tick;

/// Monotonic logical clock. Only the caller advances it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalClock {
    now: Tick,
}

impl LogicalClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Tick) -> Self {
        Self { now }
    }

    pub fn now(&self) -> Tick {
        self.now
    }

    /// Moves the clock forward by `ticks` and returns the new time.
    pub fn advance(&mut self, ticks: u64) -> Tick {
        self.now = self.now + ticks;
        self.now
    }

    /// Jumps to `tick`, which must not be in the past.
    pub fn advance_to(&mut self, tick: Tick) -> Result<Tick, ClockError> {
        if tick < self.now {
            return Err(ClockError::Regression {
                now: self.now,
                requested: tick,
            });
        }
        self.now = tick;
        Ok(self.now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_monotonically() {
        let mut clock = LogicalClock::new();
        assert_eq!(clock.advance(5), Tick(5));
        assert_eq!(clock.advance_to(Tick(5)), Ok(Tick(5)));
        assert_eq!(clock.advance_to(Tick(9)), Ok(Tick(9)));
        assert_eq!(
            clock.advance_to(Tick(3)),
            Err(ClockError::Regression {
                now: Tick(9),
                requested: Tick(3)
            })
        );
        assert_eq!(clock.now(), Tick(9));
    }
}
