//! Daily reward calculation.

use chrono::Duration;

use super::{
    RewardBreakdownEntry, RewardKind, RewardResult, RewardsEngine, MILESTONE_TIERS, STREAK_TIERS,
};
use crate::usage::duration_hours;

impl RewardsEngine {
    /// Calculate the reward for one day of screen time.
    ///
    /// # Arguments
    /// * `screen_time` - Measured usage for the day. Negative readings count as zero.
    /// * `goal_hours` - Daily usage goal in hours
    /// * `current_streak` - Consecutive goal-met days before today
    ///
    /// # Returns
    /// A [`RewardResult`] whose total is the sum of its breakdown entries.
    /// Base, streak and milestone tokens stack.
    pub fn calculate_daily_reward(
        &self,
        screen_time: Duration,
        goal_hours: f64,
        current_streak: u32,
    ) -> RewardResult {
        if screen_time < Duration::zero() {
            tracing::warn!(
                screen_time_ms = screen_time.num_milliseconds(),
                "negative screen time reading treated as zero"
            );
        }
        if !(goal_hours > 0.0) {
            tracing::warn!(goal_hours, "non-positive daily goal");
        }

        let screen_time_hours = duration_hours(screen_time);
        let hours_under_goal = self.config.hours_under_goal(screen_time_hours, goal_hours);
        let daily_goal_met = screen_time_hours <= goal_hours;

        let mut breakdown = Vec::new();

        let tokens_earned = self.config.base_tokens(screen_time_hours, goal_hours);
        if tokens_earned > 0 {
            breakdown.push(RewardBreakdownEntry::new(
                RewardKind::Base,
                format!("{:.1} hours under goal", hours_under_goal),
                tokens_earned,
            ));
        }

        let streak_bonus = self.calculate_streak_bonus(current_streak, daily_goal_met);
        if streak_bonus > 0 {
            breakdown.push(RewardBreakdownEntry::new(
                RewardKind::Streak,
                format!("{}-day streak bonus", current_streak),
                streak_bonus,
            ));
        }

        let milestone_bonus = self.calculate_milestone_bonus(screen_time_hours, goal_hours);
        if milestone_bonus > 0 {
            let percent = percentage_under_goal(screen_time_hours, goal_hours);
            breakdown.push(RewardBreakdownEntry::new(
                RewardKind::Milestone,
                format!("{:.0}% under goal", percent),
                milestone_bonus,
            ));
        }

        let total_reward = breakdown.iter().map(|e| e.tokens).sum();

        tracing::debug!(
            screen_time_hours,
            goal_hours,
            current_streak,
            total_reward,
            "daily reward calculated"
        );

        RewardResult {
            tokens_earned,
            hours_under_goal,
            daily_goal_met,
            streak_bonus,
            milestone_bonus,
            total_reward,
            breakdown,
        }
    }

    /// Streak bonus for the highest tier reached. Zero when today's goal was missed.
    pub fn calculate_streak_bonus(&self, current_streak: u32, goal_met: bool) -> i64 {
        if !goal_met {
            return 0;
        }
        STREAK_TIERS
            .iter()
            .filter(|tier| current_streak >= tier.min_days)
            .max_by_key(|tier| tier.min_days)
            .map_or(0, |tier| tier.tokens)
    }

    /// Milestone bonus for the highest percentage-under-goal tier reached.
    pub fn calculate_milestone_bonus(&self, screen_time_hours: f64, goal_hours: f64) -> i64 {
        let percent = percentage_under_goal(screen_time_hours, goal_hours);
        MILESTONE_TIERS
            .iter()
            .filter(|tier| percent >= tier.min_percent_under_goal)
            .max_by(|a, b| a.min_percent_under_goal.total_cmp(&b.min_percent_under_goal))
            .map_or(0, |tier| tier.tokens)
    }
}

/// Signed share of the goal left unused. Zero for a non-positive goal.
fn percentage_under_goal(screen_time_hours: f64, goal_hours: f64) -> f64 {
    if goal_hours > 0.0 {
        (goal_hours - screen_time_hours) / goal_hours * 100.0
    } else {
        0.0
    }
}
