use crate::error::{ErrorSeverity, GameError};

/// Rule set active for a session. Only affects aggregation caps.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum GameMode {
    #[default]
    Pve,
    Pvp,
}

/// Engine configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "EngineConfigFields")
)]
pub struct EngineConfig {
    /// Upper bound applied to every individual modifier magnitude in PVP,
    /// before same-kind modifiers are resolved.
    pvp_modifier_cap: f64,
}

impl EngineConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of abilities a single ability system can register.
    pub const MAX_ABILITIES: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PVP_MODIFIER_CAP: f64 = 0.05;

    pub fn new() -> Self {
        Self {
            pvp_modifier_cap: Self::DEFAULT_PVP_MODIFIER_CAP,
        }
    }

    /// Config with a custom PVP cap, which must be finite and non-negative.
    pub fn with_pvp_modifier_cap(pvp_modifier_cap: f64) -> Result<Self, ConfigError> {
        if !pvp_modifier_cap.is_finite() || pvp_modifier_cap < 0.0 {
            return Err(ConfigError::InvalidPvpModifierCap(pvp_modifier_cap));
        }
        Ok(Self { pvp_modifier_cap })
    }

    pub fn pvp_modifier_cap(&self) -> f64 {
        self.pvp_modifier_cap
    }

    /// Per-modifier cap for the given mode, `None` when uncapped.
    pub fn modifier_cap(&self, mode: GameMode) -> Option<f64> {
        match mode {
            GameMode::Pve => None,
            GameMode::Pvp => Some(self.pvp_modifier_cap),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejected engine configuration values.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("pvp_modifier_cap must be finite and non-negative (got {0})")]
    InvalidPvpModifierCap(f64),
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidPvpModifierCap(_) => "CONFIG_INVALID_PVP_MODIFIER_CAP",
        }
    }
}

/// Deserialized form of [`EngineConfig`]; missing fields take their defaults.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct EngineConfigFields {
    #[serde(default = "default_pvp_modifier_cap")]
    pvp_modifier_cap: f64,
}

#[cfg(feature = "serde")]
fn default_pvp_modifier_cap() -> f64 {
    EngineConfig::DEFAULT_PVP_MODIFIER_CAP
}

#[cfg(feature = "serde")]
impl TryFrom<EngineConfigFields> for EngineConfig {
    type Error = ConfigError;

    fn try_from(fields: EngineConfigFields) -> Result<Self, Self::Error> {
        Self::with_pvp_modifier_cap(fields.pvp_modifier_cap)
    }
}
