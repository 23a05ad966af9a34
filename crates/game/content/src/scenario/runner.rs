//! Executes scenario scripts against a fresh ability system.

use std::fmt;

use anyhow::{Context, anyhow};
use effect_core::{
    AbilityId, AbilitySystem, BattleLog, Buff, EngineConfig, EntityId, Event, Expiry, Roster,
    StatModifier, StatSnapshot,
};
use tracing::{debug, info};

use super::{Expectation, ScenarioSpec, StepSpec};

const TOLERANCE: f64 = 1e-6;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatField {
    Attack,
    Defense,
    Shield,
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatField::Attack => "attack",
            StatField::Defense => "defense",
            StatField::Shield => "shield",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpectationResult {
    pub entity: EntityId,
    pub field: StatField,
    pub expected: f64,
    pub actual: f64,
}

impl ExpectationResult {
    pub fn passed(&self) -> bool {
        (self.expected - self.actual).abs() < TOLERANCE
    }
}

/// Outcome of one scenario run.
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub name: String,
    pub description: String,
    /// Final stats per entity, in roster order.
    pub stats: Vec<(EntityId, StatSnapshot)>,
    pub expectations: Vec<ExpectationResult>,
    pub log: BattleLog,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.expectations.iter().all(ExpectationResult::passed)
    }

    pub fn stats_for(&self, entity: EntityId) -> Option<&StatSnapshot> {
        self.stats
            .iter()
            .find(|(id, _)| *id == entity)
            .map(|(_, stats)| stats)
    }
}

/// Runs scenarios under a fixed engine configuration.
pub struct ScenarioRunner {
    config: EngineConfig,
}

impl ScenarioRunner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, spec: &ScenarioSpec) -> anyhow::Result<ScenarioReport> {
        info!(scenario = %spec.name, "running scenario");

        let entities = spec
            .entities
            .iter()
            .map(|entity| entity.build())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid entity in scenario '{}'", spec.name))?;
        let mut roster = Roster::from_entities(entities)
            .with_context(|| format!("invalid roster in scenario '{}'", spec.name))?;

        let mut system = AbilitySystem::with_config(self.config.clone());
        system.set_mode(spec.mode);
        for ability in &spec.abilities {
            let ability = ability
                .build()
                .with_context(|| format!("invalid ability in scenario '{}'", spec.name))?;
            system.register(ability)?;
        }

        let mut log = BattleLog::starting_at(system.now());
        for (index, step) in spec.steps.iter().enumerate() {
            debug!(scenario = %spec.name, index, ?step, "executing step");
            Self::execute_step(&mut system, &mut roster, &mut log, step)
                .with_context(|| format!("step {} of scenario '{}' failed", index, spec.name))?;
        }

        let stats = system.compute_roster_stats(&mut roster);
        let expectations: Vec<ExpectationResult> = spec
            .expectations
            .iter()
            .map(|expectation| Self::evaluate(expectation, &stats))
            .collect::<anyhow::Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .collect();

        Ok(ScenarioReport {
            name: spec.name.clone(),
            description: spec.description.clone(),
            stats,
            expectations,
            log,
        })
    }

    fn execute_step(
        system: &mut AbilitySystem,
        roster: &mut Roster,
        log: &mut BattleLog,
        step: &StepSpec,
    ) -> anyhow::Result<()> {
        match step {
            StepSpec::Dispatch { event, primary } => {
                let event = Event::from(*event);
                system.dispatch(&event, EntityId(*primary), roster, log)?;
            }
            StepSpec::Advance(ticks) => {
                system.advance(*ticks);
            }
            StepSpec::SetMode(mode) => system.set_mode(*mode),
            StepSpec::ApplyBuff {
                entity,
                name,
                kind,
                magnitude,
                duration,
            } => {
                let expires_at = Expiry::after(system.now(), *duration);
                let modifier =
                    StatModifier::new(*kind, *magnitude, expires_at, AbilityId::EXTERNAL)?;
                let target = roster
                    .get_mut(EntityId(*entity))
                    .ok_or_else(|| anyhow!("entity {} is not in the roster", entity))?;
                target.add_buff(Buff::new(name.clone(), expires_at).with_modifier(modifier));
            }
        }
        Ok(())
    }

    fn evaluate(
        expectation: &Expectation,
        stats: &[(EntityId, StatSnapshot)],
    ) -> anyhow::Result<Vec<ExpectationResult>> {
        let entity = EntityId(expectation.entity);
        let snapshot = stats
            .iter()
            .find(|(id, _)| *id == entity)
            .map(|(_, snapshot)| snapshot)
            .ok_or_else(|| anyhow!("expectation references unknown entity {}", entity))?;

        let checks = [
            (StatField::Attack, expectation.attack, snapshot.attack),
            (StatField::Defense, expectation.defense, snapshot.defense),
            (StatField::Shield, expectation.shield, snapshot.shield),
        ];
        Ok(checks
            .into_iter()
            .filter_map(|(field, expected, actual)| {
                expected.map(|expected| ExpectationResult {
                    entity,
                    field,
                    expected,
                    actual,
                })
            })
            .collect())
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{AbilitySpec, EntitySpec, EventSpec};
    use effect_core::{GameMode, ModifierKind, Outcome};

    fn hero(id: u32, x: f64) -> EntitySpec {
        EntitySpec {
            id,
            base_atk: 100.0,
            base_def: 50.0,
            x,
            y: 0.0,
        }
    }

    #[test]
    fn direct_buffs_resolve_by_maximum() {
        let spec = ScenarioSpec {
            name: "direct".into(),
            description: String::new(),
            mode: GameMode::Pve,
            entities: vec![hero(1, 0.0)],
            abilities: vec![],
            steps: vec![
                StepSpec::ApplyBuff {
                    entity: 1,
                    name: "A".into(),
                    kind: ModifierKind::AtkUp,
                    magnitude: 0.10,
                    duration: 5_000,
                },
                StepSpec::ApplyBuff {
                    entity: 1,
                    name: "B".into(),
                    kind: ModifierKind::AtkUp,
                    magnitude: 0.15,
                    duration: 5_000,
                },
            ],
            expectations: vec![Expectation {
                entity: 1,
                attack: Some(115.0),
                defense: Some(50.0),
                shield: None,
            }],
        };

        let report = ScenarioRunner::default().run(&spec).unwrap();
        assert!(report.passed());
        assert_eq!(report.expectations.len(), 2);
    }

    #[test]
    fn failed_expectation_is_reported_not_raised() {
        let spec = ScenarioSpec {
            name: "cooldown".into(),
            description: String::new(),
            mode: GameMode::Pve,
            entities: vec![hero(1, 0.0)],
            abilities: vec![AbilitySpec::CritShield {
                shield_value: 100.0,
                cooldown: 50,
            }],
            steps: vec![
                StepSpec::Dispatch {
                    event: EventSpec::Crit { attacker: 1 },
                    primary: 1,
                },
                StepSpec::Dispatch {
                    event: EventSpec::Crit { attacker: 1 },
                    primary: 1,
                },
            ],
            expectations: vec![Expectation {
                entity: 1,
                attack: None,
                defense: None,
                shield: Some(200.0),
            }],
        };

        let report = ScenarioRunner::default().run(&spec).unwrap();
        assert!(!report.passed());
        assert_eq!(report.expectations[0].actual, 100.0);
        assert_eq!(report.log.with_outcome(Outcome::BlockedByCooldown).count(), 1);
    }

    #[test]
    fn unknown_primary_fails_the_run() {
        let spec = ScenarioSpec {
            name: "broken".into(),
            description: String::new(),
            mode: GameMode::Pve,
            entities: vec![hero(1, 0.0)],
            abilities: vec![],
            steps: vec![StepSpec::Dispatch {
                event: EventSpec::Tick,
                primary: 2,
            }],
            expectations: vec![],
        };

        let error = ScenarioRunner::default().run(&spec).unwrap_err();
        assert!(format!("{:#}", error).contains("entity #2 is not in the roster"));
    }

    #[test]
    fn invalid_ability_fails_the_run() {
        let spec = ScenarioSpec {
            name: "bad_aura".into(),
            description: String::new(),
            mode: GameMode::Pve,
            entities: vec![hero(1, 0.0)],
            abilities: vec![AbilitySpec::Aura {
                name: "AURA".into(),
                atk_bonus: 0.1,
                range: 5.0,
                duration: 0,
            }],
            steps: vec![],
            expectations: vec![],
        };

        assert!(ScenarioRunner::default().run(&spec).is_err());
    }
}
