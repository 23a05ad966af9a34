//! Scenarios embedded in the binary.

use anyhow::Context;

use super::ScenarioSpec;

const SOURCES: [(&str, &str); 5] = [
    (
        "crit_shield_no_cooldown",
        include_str!("../../data/scenarios/crit_shield_no_cooldown.ron"),
    ),
    (
        "crit_shield_cooldown",
        include_str!("../../data/scenarios/crit_shield_cooldown.ron"),
    ),
    ("aura", include_str!("../../data/scenarios/aura.ron")),
    (
        "mutual_exclusion",
        include_str!("../../data/scenarios/mutual_exclusion.ron"),
    ),
    ("pvp_mode", include_str!("../../data/scenarios/pvp_mode.ron")),
];

/// Reference scenarios shipped with the crate, in a fixed order.
#[derive(Debug, Clone)]
pub struct BundledScenarios {
    scenarios: Vec<ScenarioSpec>,
}

impl BundledScenarios {
    /// Parses every embedded scenario file.
    pub fn load() -> anyhow::Result<Self> {
        let scenarios = SOURCES
            .iter()
            .map(|(file, source)| {
                ron::from_str::<ScenarioSpec>(source)
                    .with_context(|| format!("Failed to parse bundled scenario {}.ron", file))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self { scenarios })
    }

    pub fn get(&self, name: &str) -> Option<&ScenarioSpec> {
        self.scenarios.iter().find(|spec| spec.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.scenarios.iter().map(|spec| spec.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioSpec> {
        self.scenarios.iter()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
