//! Screen-time reduction to savings conversion.

use serde::{Deserialize, Serialize};

use super::{SavingsSimulator, DAYS_PER_MONTH, MONTHS_PER_YEAR};

/// Lowest daily usage a scenario will ever project.
const MIN_TARGET_HOURS: f64 = 1.0;
/// Usage above which meeting the goal counts as a hard scenario.
const HEAVY_USAGE_HOURS: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeToSavings {
    pub current_hours: f64,
    pub target_hours: f64,
    pub daily_goal_hours: f64,
    pub current_daily_tokens: i64,
    pub target_daily_tokens: i64,
    pub daily_tokens_gained: i64,
    pub monthly_tokens_gained: i64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenTimeScenario {
    pub title: String,
    pub difficulty: ScenarioDifficulty,
    pub savings: ScreenTimeToSavings,
}

impl SavingsSimulator {
    /// Extra tokens and currency from moving daily usage from
    /// `current_hours` to `target_hours`, using the rewards engine's base
    /// reward formula for both levels.
    pub fn calculate_screen_time_to_savings(
        &self,
        current_hours: f64,
        target_hours: f64,
        daily_goal_hours: f64,
    ) -> ScreenTimeToSavings {
        let current_daily_tokens = self.rewards.base_tokens(current_hours, daily_goal_hours);
        let target_daily_tokens = self.rewards.base_tokens(target_hours, daily_goal_hours);
        let daily_tokens_gained = target_daily_tokens - current_daily_tokens;
        let monthly_tokens_gained = daily_tokens_gained * DAYS_PER_MONTH as i64;
        let monthly_savings = self.tokens_to_kes(monthly_tokens_gained as f64);

        ScreenTimeToSavings {
            current_hours,
            target_hours,
            daily_goal_hours,
            current_daily_tokens,
            target_daily_tokens,
            daily_tokens_gained,
            monthly_tokens_gained,
            monthly_savings,
            annual_savings: monthly_savings * MONTHS_PER_YEAR,
        }
    }

    /// Fixed reduction scenarios against the configured daily goal:
    /// one, two and three hours less, and meeting the goal outright.
    /// Scenarios that gain no tokens are dropped.
    ///
    /// Base tokens only accrue below the goal, so landing exactly on it
    /// never gains anything and the "meet your daily goal" scenario is
    /// always filtered out under the current base formula.
    pub fn generate_screen_time_scenarios(&self, current_hours: f64) -> Vec<ScreenTimeScenario> {
        let goal = self.rewards.daily_goal_hours;
        let goal_difficulty = if current_hours > HEAVY_USAGE_HOURS {
            ScenarioDifficulty::Hard
        } else {
            ScenarioDifficulty::Medium
        };

        let candidates = [
            ("Cut 1 hour a day", current_hours - 1.0, ScenarioDifficulty::Easy),
            ("Cut 2 hours a day", current_hours - 2.0, ScenarioDifficulty::Medium),
            ("Cut 3 hours a day", current_hours - 3.0, ScenarioDifficulty::Hard),
            ("Meet your daily goal", goal, goal_difficulty),
        ];

        candidates
            .into_iter()
            .map(|(title, target, difficulty)| ScreenTimeScenario {
                title: title.to_string(),
                difficulty,
                savings: self.calculate_screen_time_to_savings(
                    current_hours,
                    target.max(MIN_TARGET_HOURS),
                    goal,
                ),
            })
            .filter(|s| s.savings.daily_tokens_gained > 0)
            .collect()
    }
}
