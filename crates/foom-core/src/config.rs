//! TOML-based engine configuration.
//!
//! The tunable constants the rewards engine and the savings simulator
//! depend on live here. Streak and milestone tiers are fixed and live in
//! [`crate::rewards`].
//! - Token earning rate and the default daily screen-time goal
//! - Challenge payout multipliers
//! - Per-category bonus and penalty rates
//! - Token-to-currency conversion and the fund catalog
//!
//! Configuration is stored at `~/.config/foom/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, ValidationError};
use crate::savings::FundOption;

/// Challenge payout threshold and the multiplier it selects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChallengeMultiplier {
    pub min_reward: i64,
    pub multiplier: f64,
}

/// Per-category bonus and penalty rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRates {
    #[serde(default = "default_productive_rate")]
    pub productive_tokens_per_hour: f64,
    #[serde(default = "default_social_free_hours")]
    pub social_free_hours: f64,
    #[serde(default = "default_social_penalty_rate")]
    pub social_penalty_tokens_per_hour: f64,
}

/// Thresholds for the rule-based recommendation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    #[serde(default = "default_over_goal_margin")]
    pub over_goal_margin_hours: f64,
    #[serde(default = "default_low_productive_hours")]
    pub low_productive_hours: f64,
    #[serde(default = "default_max_hints")]
    pub max_hints: usize,
}

/// Rewards engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardConfig {
    #[serde(default = "default_tokens_per_hour")]
    pub tokens_per_hour: f64,
    #[serde(default = "default_daily_goal_hours")]
    pub daily_goal_hours: f64,
    #[serde(default = "default_challenge_multipliers")]
    pub challenge_multipliers: Vec<ChallengeMultiplier>,
    #[serde(default)]
    pub categories: CategoryRates,
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}

/// Savings simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsConfig {
    /// Currency units (KES) one token converts to.
    #[serde(default = "default_kes_per_token")]
    pub kes_per_token: f64,
    /// Monthly amount below which any goal counts as feasible.
    #[serde(default = "default_reasonable_monthly_goal")]
    pub reasonable_monthly_goal: f64,
    #[serde(default = "default_long_term_rate")]
    pub default_long_term_rate_percent: f64,
    /// Share of its monthly need a high-priority goal is reserved first.
    #[serde(default = "default_high_priority_floor")]
    pub high_priority_floor: f64,
    #[serde(default = "default_funds")]
    pub funds: Vec<FundOption>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/foom/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FoomConfig {
    #[serde(default)]
    pub rewards: RewardConfig,
    #[serde(default)]
    pub savings: SavingsConfig,
}

// Default functions
fn default_tokens_per_hour() -> f64 {
    10.0
}
fn default_daily_goal_hours() -> f64 {
    8.0
}
fn default_challenge_multipliers() -> Vec<ChallengeMultiplier> {
    vec![
        ChallengeMultiplier {
            min_reward: 50,
            multiplier: 1.5,
        },
        ChallengeMultiplier {
            min_reward: 25,
            multiplier: 1.2,
        },
    ]
}
fn default_productive_rate() -> f64 {
    2.0
}
fn default_social_free_hours() -> f64 {
    2.0
}
fn default_social_penalty_rate() -> f64 {
    3.0
}
fn default_over_goal_margin() -> f64 {
    2.0
}
fn default_low_productive_hours() -> f64 {
    1.0
}
fn default_max_hints() -> usize {
    3
}
fn default_kes_per_token() -> f64 {
    1.0
}
fn default_reasonable_monthly_goal() -> f64 {
    10_000.0
}
fn default_long_term_rate() -> f64 {
    9.0
}
fn default_high_priority_floor() -> f64 {
    0.5
}
fn default_funds() -> Vec<FundOption> {
    FundOption::default_catalog()
}

impl Default for CategoryRates {
    fn default() -> Self {
        Self {
            productive_tokens_per_hour: default_productive_rate(),
            social_free_hours: default_social_free_hours(),
            social_penalty_tokens_per_hour: default_social_penalty_rate(),
        }
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            over_goal_margin_hours: default_over_goal_margin(),
            low_productive_hours: default_low_productive_hours(),
            max_hints: default_max_hints(),
        }
    }
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            tokens_per_hour: default_tokens_per_hour(),
            daily_goal_hours: default_daily_goal_hours(),
            challenge_multipliers: default_challenge_multipliers(),
            categories: CategoryRates::default(),
            recommendations: RecommendationConfig::default(),
        }
    }
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            kes_per_token: default_kes_per_token(),
            reasonable_monthly_goal: default_reasonable_monthly_goal(),
            default_long_term_rate_percent: default_long_term_rate(),
            high_priority_floor: default_high_priority_floor(),
            funds: default_funds(),
        }
    }
}

impl RewardConfig {
    /// Hours between usage and goal, never negative.
    pub fn hours_under_goal(&self, screen_time_hours: f64, goal_hours: f64) -> f64 {
        (goal_hours - screen_time_hours).max(0.0)
    }

    /// Base token reward for a day's usage against a goal.
    ///
    /// Shared by the daily reward and the screen-time savings projections so
    /// the dashboard and the simulator can never disagree.
    pub fn base_tokens(&self, screen_time_hours: f64, goal_hours: f64) -> i64 {
        (self.hours_under_goal(screen_time_hours, goal_hours) * self.tokens_per_hour).floor() as i64
    }
}

/// Returns `~/.config/foom[-dev]/` based on FOOM_ENV.
///
/// Set FOOM_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if the home directory is unknown or creating the config
/// directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir().ok_or(ConfigError::NoConfigDir)?.join(".config");

    let env = std::env::var("FOOM_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("foom-dev")
    } else {
        base_dir.join("foom")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

impl FoomConfig {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(root: &mut serde_json::Value, key: &str, value: &str) -> Result<()> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().map_or(true, |p| p.is_empty()) {
            return Err(unknown().into());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|e| invalid(e.to_string()))?,
                    ),
                    serde_json::Value::Number(_) => {
                        if let Ok(n) = value.parse::<u64>() {
                            serde_json::Value::Number(n.into())
                        } else if let Ok(n) = value.parse::<f64>() {
                            serde_json::Number::from_f64(n)
                                .map(serde_json::Value::Number)
                                .ok_or_else(|| invalid(format!("cannot parse '{value}' as number")))?
                        } else {
                            return Err(invalid(format!("cannot parse '{value}' as number")).into());
                        }
                    }
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        serde_json::from_str(value)?
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown().into())
    }

    /// Default on-disk location.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// fails validation, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            let cfg = Self::default();
            cfg.save_to(&path)?;
            tracing::debug!(path = %path.display(), "wrote default configuration");
            return Ok(cfg);
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                }
                .into())
            }
        };
        let cfg: FoomConfig = toml::from_str(&content)?;
        cfg.validate()?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from the default location, falling back to defaults on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "falling back to default configuration");
            Self::default()
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. The caller persists.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the resulting configuration fails validation.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: FoomConfig = serde_json::from_value(json)?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Reject values the calculators cannot meaningfully use.
    pub fn validate(&self) -> Result<()> {
        let invalid = |key: &str, message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        };

        if !(self.rewards.daily_goal_hours > 0.0) {
            return Err(invalid("rewards.daily_goal_hours", "must be positive").into());
        }
        if !(self.rewards.tokens_per_hour > 0.0) {
            return Err(invalid("rewards.tokens_per_hour", "must be positive").into());
        }
        if !(self.savings.kes_per_token > 0.0) {
            return Err(invalid("savings.kes_per_token", "must be positive").into());
        }
        if !(0.0..=1.0).contains(&self.savings.high_priority_floor) {
            return Err(invalid("savings.high_priority_floor", "must be between 0 and 1").into());
        }
        if self.savings.funds.is_empty() {
            return Err(ValidationError::EmptyCollection("savings.funds".into()).into());
        }
        for fund in &self.savings.funds {
            fund.validate()?;
        }
        Ok(())
    }
}
