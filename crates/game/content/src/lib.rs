//! Data-driven content for the effect resolution engine.
//!
//! This crate provides loaders for RON/TOML data files and the scenario
//! harness built on top of them:
//! - Engine configuration (data-driven via TOML)
//! - Scenario scripts (data-driven via RON)
//! - Reference scenarios embedded in the crate
//!
//! All loaders use effect-core types directly with serde for deserialization.

pub mod loaders;
pub mod scenario;

pub use loaders::{ConfigLoader, ContentFactory, LoadResult, ScenarioLoader};
pub use scenario::{
    AbilitySpec, BundledScenarios, EntitySpec, EventSpec, Expectation, ExpectationResult,
    ScenarioReport, ScenarioRunner, ScenarioSpec, StatField, StepSpec,
};
