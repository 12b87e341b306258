//! Weekly performance aggregation.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::{RewardsEngine, StreakState};
use crate::usage::duration_hours;

/// Share of goal-met days at or above which a week is rated excellent.
const EXCELLENT_RATIO: f64 = 0.8;
/// Share of goal-met days at or above which a week is rated good.
const GOOD_RATIO: f64 = 0.5;

/// Overall rating for a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    Excellent,
    Good,
    NeedsImprovement,
}

impl PerformanceRating {
    /// Rate a goal-met ratio. Boundaries belong to the higher band.
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= EXCELLENT_RATIO {
            PerformanceRating::Excellent
        } else if ratio >= GOOD_RATIO {
            PerformanceRating::Good
        } else {
            PerformanceRating::NeedsImprovement
        }
    }
}

/// Aggregated result for a sequence of days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyPerformance {
    pub total_tokens_earned: i64,
    /// Mean daily screen time in hours
    pub average_screen_time: f64,
    pub goals_met_count: u32,
    pub streak_data: StreakState,
    pub performance: PerformanceRating,
}

impl Default for WeeklyPerformance {
    fn default() -> Self {
        Self {
            total_tokens_earned: 0,
            average_screen_time: 0.0,
            goals_met_count: 0,
            streak_data: StreakState::default(),
            performance: PerformanceRating::NeedsImprovement,
        }
    }
}

impl RewardsEngine {
    /// Replay a sequence of daily screen times against the configured goal.
    ///
    /// Each day's streak bonus is computed from the streak accumulated
    /// through the previous day; the day's own success only counts from the
    /// next day onward. An empty sequence yields the zeroed default.
    pub fn calculate_weekly_performance(&self, daily_screen_times: &[Duration]) -> WeeklyPerformance {
        if daily_screen_times.is_empty() {
            return WeeklyPerformance::default();
        }

        let goal_hours = self.config.daily_goal_hours;
        let mut total_tokens_earned = 0;
        let mut total_hours = 0.0;
        let mut goals_met_count = 0u32;
        let mut temp_streak = 0u32;
        let mut longest_streak = 0u32;

        for &screen_time in daily_screen_times {
            let reward = self.calculate_daily_reward(screen_time, goal_hours, temp_streak);
            total_tokens_earned += reward.total_reward;
            total_hours += duration_hours(screen_time);

            if reward.daily_goal_met {
                goals_met_count += 1;
                temp_streak += 1;
                longest_streak = longest_streak.max(temp_streak);
            } else {
                temp_streak = 0;
            }
        }

        let days = daily_screen_times.len() as f64;
        let performance = PerformanceRating::from_ratio(goals_met_count as f64 / days);

        tracing::debug!(
            days = daily_screen_times.len(),
            goals_met_count,
            total_tokens_earned,
            ?performance,
            "weekly performance calculated"
        );

        WeeklyPerformance {
            total_tokens_earned,
            average_screen_time: total_hours / days,
            goals_met_count,
            streak_data: StreakState {
                current_streak: temp_streak,
                longest_streak,
                goals_met_count,
            },
            performance,
        }
    }
}
