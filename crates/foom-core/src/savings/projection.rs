//! Time-to-goal projections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SavingsSimulator, DAYS_PER_MONTH};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsProjection {
    pub current_savings: f64,
    pub goal_amount: f64,
    pub amount_needed: f64,
    /// Whole days until the target date, at least 1
    pub time_to_goal: i64,
    pub daily_required: f64,
    pub weekly_required: f64,
    pub monthly_required: f64,
    /// Currency the caller's average token rate yields per month
    pub monthly_token_savings: f64,
    pub is_feasible: bool,
    pub recommendations: Vec<String>,
}

impl SavingsSimulator {
    /// Required savings rates to reach `goal_amount` by `target_date`.
    ///
    /// A target date at or before `now` is clamped to a one-day horizon.
    /// A goal counts as feasible when token earnings alone cover the monthly
    /// requirement or the requirement is under the configured
    /// "reasonable goal" threshold.
    pub fn calculate_savings_projection(
        &self,
        current_savings: f64,
        goal_amount: f64,
        target_date: DateTime<Utc>,
        average_daily_tokens: f64,
        now: DateTime<Utc>,
    ) -> SavingsProjection {
        let days_raw = (target_date - now).num_milliseconds() as f64 / MILLIS_PER_DAY;
        let time_to_goal = (days_raw.ceil() as i64).max(1);

        let amount_needed = (goal_amount - current_savings).max(0.0);
        let daily_required = amount_needed / time_to_goal as f64;
        let weekly_required = daily_required * 7.0;
        let monthly_required = daily_required * DAYS_PER_MONTH;

        let monthly_token_savings = self.tokens_to_kes(average_daily_tokens) * DAYS_PER_MONTH;
        let tokens_cover = monthly_token_savings >= monthly_required;
        let is_feasible = tokens_cover || monthly_required <= self.config.reasonable_monthly_goal;

        let mut recommendations = Vec::new();
        if !is_feasible {
            recommendations.push(format!(
                "This goal needs KES {:.0} a month. Consider moving the target date further out.",
                monthly_required
            ));
            recommendations.push("Consider lowering the goal amount or splitting it into stages.".to_string());
        }
        if !tokens_cover {
            let tokens_needed_daily =
                (monthly_required / DAYS_PER_MONTH / self.config.kes_per_token).ceil();
            let extra_tokens = (tokens_needed_daily - average_daily_tokens).max(0.0);
            recommendations.push(format!(
                "Earn about {:.0} more tokens a day to fund this goal from rewards alone.",
                extra_tokens
            ));
            recommendations.push(format!(
                "Or top up with KES {:.0} a month from other savings.",
                monthly_required - monthly_token_savings
            ));
        }

        tracing::debug!(
            time_to_goal,
            monthly_required,
            monthly_token_savings,
            is_feasible,
            "savings projection calculated"
        );

        SavingsProjection {
            current_savings,
            goal_amount,
            amount_needed,
            time_to_goal,
            daily_required,
            weekly_required,
            monthly_required,
            monthly_token_savings,
            is_feasible,
            recommendations,
        }
    }
}
