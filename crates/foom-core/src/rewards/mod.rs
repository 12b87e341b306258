//! Rewards engine.
//!
//! Converts screen-time behavior into token rewards and user-facing
//! guidance text. Every operation is a pure function of its arguments and
//! the engine's [`RewardConfig`]; all history (streaks, challenge progress)
//! is passed in explicitly by the caller, who also owns persistence.
//!
//! - **Daily reward**: base tokens for hours under goal, plus streak and
//!   milestone bonuses
//! - **Weekly performance**: sequential replay of a week of daily totals
//! - **Challenges**: fixed daily/weekly catalogs and their payouts
//! - **Category rewards**: bonuses for productive apps, penalties for
//!   social media beyond the free allowance
//! - **Recommendations** and **seasonal events**

mod category;
mod challenges;
mod daily;
mod events;
mod recommendations;
mod weekly;

pub use category::AppSpecificRewards;
pub use challenges::{Challenge, ChallengeKind};
pub use events::EventBonus;
pub use recommendations::RecommendationInput;
pub use weekly::{PerformanceRating, WeeklyPerformance};

use serde::{Deserialize, Serialize};

use crate::config::RewardConfig;

/// Streak length threshold and its payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakTier {
    pub min_days: u32,
    pub tokens: i64,
}

/// Percentage-under-goal threshold and its payout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MilestoneTier {
    pub min_percent_under_goal: f64,
    pub tokens: i64,
}

/// Streak payouts, ascending. The highest tier reached wins.
pub const STREAK_TIERS: [StreakTier; 6] = [
    StreakTier { min_days: 2, tokens: 2 },
    StreakTier { min_days: 3, tokens: 5 },
    StreakTier { min_days: 7, tokens: 15 },
    StreakTier { min_days: 14, tokens: 25 },
    StreakTier { min_days: 21, tokens: 35 },
    StreakTier { min_days: 30, tokens: 50 },
];

/// Milestone payouts, highest threshold first.
pub const MILESTONE_TIERS: [MilestoneTier; 2] = [
    MilestoneTier {
        min_percent_under_goal: 50.0,
        tokens: 20,
    },
    MilestoneTier {
        min_percent_under_goal: 25.0,
        tokens: 10,
    },
];

/// Source of a reward breakdown line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardKind {
    Base,
    Streak,
    Milestone,
    Challenge,
    Category,
}

/// One auditable line of a reward. Penalties carry negative tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardBreakdownEntry {
    pub kind: RewardKind,
    pub label: String,
    pub tokens: i64,
}

impl RewardBreakdownEntry {
    pub fn new(kind: RewardKind, label: impl Into<String>, tokens: i64) -> Self {
        Self {
            kind,
            label: label.into(),
            tokens,
        }
    }
}

/// Result of a single day's reward calculation.
///
/// `total_reward` always equals the sum of `breakdown` tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardResult {
    /// Base tokens only
    pub tokens_earned: i64,
    pub hours_under_goal: f64,
    pub daily_goal_met: bool,
    pub streak_bonus: i64,
    pub milestone_bonus: i64,
    pub total_reward: i64,
    pub breakdown: Vec<RewardBreakdownEntry>,
}

/// Streak counters owned by the caller's ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub goals_met_count: u32,
}

/// Stateless rewards calculator.
#[derive(Debug, Clone, Default)]
pub struct RewardsEngine {
    config: RewardConfig,
}

impl RewardsEngine {
    /// Create an engine with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom constants.
    pub fn with_config(config: RewardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }
}
