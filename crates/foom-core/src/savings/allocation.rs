//! Allocation of a monthly token budget across savings goals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SavingsSimulator, DAYS_PER_MONTH};
use crate::error::ValidationError;

/// Days-remaining threshold under which an unfinished goal is high priority.
const HIGH_PRIORITY_DAYS: i64 = 30;
/// Days-remaining threshold under which a goal is at least medium priority.
const MEDIUM_PRIORITY_DAYS: i64 = 90;
/// Completion ratio separating nearly-finished goals.
const NEARLY_COMPLETE: f64 = 0.8;

/// A savings goal owned by the caller's ledger.
///
/// `current_amount` may exceed `target_amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    pub target_date: DateTime<Utc>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl SavingsGoal {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::invalid("goal.id", "must not be empty"));
        }
        if !(self.target_amount > 0.0) {
            return Err(ValidationError::invalid(
                format!("goal.{}.target_amount", self.id),
                "must be positive",
            ));
        }
        if !(self.current_amount >= 0.0) {
            return Err(ValidationError::invalid(
                format!("goal.{}.current_amount", self.id),
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// Share of the target already saved. Can exceed 1.0.
    pub fn completion(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount
        } else {
            1.0
        }
    }
}

/// Allocation order. `High` sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    High,
    Medium,
    Low,
}

impl GoalPriority {
    /// Classify by days remaining (negative when overdue) and completion.
    pub fn classify(urgency_days: i64, completion: f64) -> Self {
        if urgency_days < HIGH_PRIORITY_DAYS && completion < NEARLY_COMPLETE {
            GoalPriority::High
        } else if urgency_days < MEDIUM_PRIORITY_DAYS || completion > NEARLY_COMPLETE {
            GoalPriority::Medium
        } else {
            GoalPriority::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAllocation {
    pub goal_id: String,
    pub goal_name: String,
    pub priority: GoalPriority,
    pub urgency_days: i64,
    pub completion: f64,
    /// Currency per month needed to finish on time
    pub monthly_need: f64,
    pub allocated_tokens: u64,
    pub allocated_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptimalAllocation {
    pub allocations: Vec<GoalAllocation>,
    pub remaining_tokens: u64,
    pub total_allocated: u64,
}

impl SavingsSimulator {
    /// Split `monthly_tokens` across the active goals.
    ///
    /// Goals are ordered by priority, then by fewest days remaining, and
    /// funded greedily in that order: each takes its full monthly need or
    /// whatever budget is left. A high priority goal is guaranteed at least
    /// the configured floor share of its need, funds permitting. Each grant
    /// converts to whole tokens before it is subtracted, so
    /// `total_allocated + remaining_tokens` always equals `monthly_tokens`.
    /// Goals left with nothing are omitted.
    pub fn calculate_optimal_allocation(
        &self,
        monthly_tokens: u64,
        goals: &[SavingsGoal],
        now: DateTime<Utc>,
    ) -> OptimalAllocation {
        let mut plan: Vec<GoalAllocation> = goals
            .iter()
            .filter(|g| g.is_active)
            .map(|goal| {
                let urgency_days = (goal.target_date - now).num_days();
                let completion = goal.completion();
                let remaining = (goal.target_amount - goal.current_amount).max(0.0);
                let months_left = (urgency_days as f64 / DAYS_PER_MONTH).max(1.0);
                GoalAllocation {
                    goal_id: goal.id.clone(),
                    goal_name: goal.name.clone(),
                    priority: GoalPriority::classify(urgency_days, completion),
                    urgency_days,
                    completion,
                    monthly_need: remaining / months_left,
                    allocated_tokens: 0,
                    allocated_amount: 0.0,
                }
            })
            .collect();

        plan.sort_by(|a, b| {
            a.priority
                .cmp(&b.priority)
                .then(a.urgency_days.cmp(&b.urgency_days))
        });

        let mut remaining_tokens = monthly_tokens;

        for goal in plan.iter_mut() {
            let floor = if goal.priority == GoalPriority::High {
                goal.monthly_need * self.config.high_priority_floor
            } else {
                0.0
            };
            // Silently short when the budget cannot cover the floor.
            goal.allocated_tokens =
                self.take_tokens(&mut remaining_tokens, goal.monthly_need.max(floor));
        }

        let allocations: Vec<GoalAllocation> = plan
            .into_iter()
            .filter(|g| g.allocated_tokens > 0)
            .map(|mut g| {
                g.allocated_amount = self.tokens_to_kes(g.allocated_tokens as f64);
                tracing::debug!(
                    goal = %g.goal_id,
                    priority = ?g.priority,
                    tokens = g.allocated_tokens,
                    "goal allocation"
                );
                g
            })
            .collect();

        let total_allocated = monthly_tokens - remaining_tokens;
        OptimalAllocation {
            allocations,
            remaining_tokens,
            total_allocated,
        }
    }

    /// Quantize `wanted_kes` (capped by what is left) to whole tokens and
    /// take them from the budget.
    fn take_tokens(&self, remaining_tokens: &mut u64, wanted_kes: f64) -> u64 {
        let available_kes = self.tokens_to_kes(*remaining_tokens as f64);
        let tokens = self
            .kes_to_tokens(wanted_kes.min(available_kes))
            .min(*remaining_tokens);
        *remaining_tokens -= tokens;
        tokens
    }
}
