//! Per-category bonuses and penalties.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{RewardBreakdownEntry, RewardKind, RewardsEngine};
use crate::usage::{merge_category_usage, AppCategory, CategoryUsage};

/// Signed per-category ledger for a day's usage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSpecificRewards {
    /// Tokens earned from productive categories
    pub bonus_tokens: i64,
    /// Tokens lost to social media overuse (non-negative magnitude)
    pub penalty_tokens: i64,
    /// `bonus_tokens - penalty_tokens`
    pub net_tokens: i64,
    pub category_breakdown: BTreeMap<AppCategory, i64>,
    pub breakdown: Vec<RewardBreakdownEntry>,
}

impl RewardsEngine {
    /// Bonus tokens for productive apps and a linear penalty for social
    /// media beyond the daily free allowance.
    ///
    /// Entries are per app; rates and the allowance apply to each
    /// category's daily total.
    pub fn calculate_app_specific_rewards(&self, usage: &[CategoryUsage]) -> AppSpecificRewards {
        let rates = &self.config.categories;
        let mut result = AppSpecificRewards::default();

        for entry in merge_category_usage(usage) {
            let hours = entry.hours();

            let tokens = if entry.category.is_productive() {
                (hours * rates.productive_tokens_per_hour).floor() as i64
            } else if entry.category == AppCategory::SocialMedia && hours > rates.social_free_hours {
                -((hours - rates.social_free_hours) * rates.social_penalty_tokens_per_hour).floor()
                    as i64
            } else {
                continue;
            };

            if tokens == 0 {
                continue;
            }

            if tokens > 0 {
                result.bonus_tokens += tokens;
            } else {
                result.penalty_tokens -= tokens;
            }
            *result.category_breakdown.entry(entry.category).or_insert(0) += tokens;

            let label = if tokens > 0 {
                format!("{} bonus ({:.1}h)", entry.category, hours)
            } else {
                format!(
                    "{} over {:.0}h allowance ({:.1}h)",
                    entry.category, rates.social_free_hours, hours
                )
            };
            result
                .breakdown
                .push(RewardBreakdownEntry::new(RewardKind::Category, label, tokens));
        }

        result.net_tokens = result.bonus_tokens - result.penalty_tokens;
        tracing::debug!(
            bonus = result.bonus_tokens,
            penalty = result.penalty_tokens,
            "app-specific rewards calculated"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_productive_bonus() {
        let engine = RewardsEngine::new();
        let usage = vec![
            CategoryUsage::new(AppCategory::Productivity, Duration::minutes(150)),
            CategoryUsage::new(AppCategory::Education, Duration::minutes(45)),
        ];
        let result = engine.calculate_app_specific_rewards(&usage);

        assert_eq!(result.category_breakdown[&AppCategory::Productivity], 5);
        assert_eq!(result.category_breakdown[&AppCategory::Education], 1);
        assert_eq!(result.bonus_tokens, 6);
        assert_eq!(result.penalty_tokens, 0);
        assert_eq!(result.net_tokens, 6);
    }

    #[test]
    fn test_social_penalty_is_linear_past_allowance() {
        let engine = RewardsEngine::new();

        let within = engine.calculate_app_specific_rewards(&[CategoryUsage::new(
            AppCategory::SocialMedia,
            Duration::hours(2),
        )]);
        assert_eq!(within.net_tokens, 0);
        assert!(within.breakdown.is_empty());

        let over = engine.calculate_app_specific_rewards(&[CategoryUsage::new(
            AppCategory::SocialMedia,
            Duration::minutes(210),
        )]);
        assert_eq!(over.penalty_tokens, 4); // 1.5h * 3 = 4.5
        assert_eq!(over.category_breakdown[&AppCategory::SocialMedia], -4);
        assert_eq!(over.breakdown[0].tokens, -4);
    }

    #[test]
    fn test_social_allowance_covers_all_social_apps() {
        let engine = RewardsEngine::new();
        let usage = vec![
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(90)),
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(90)),
        ];
        let result = engine.calculate_app_specific_rewards(&usage);

        assert_eq!(result.penalty_tokens, 3); // 1h over * 3
        assert_eq!(result.net_tokens, -3);
        assert_eq!(result.breakdown.len(), 1);
        assert!(result.breakdown[0].label.contains("3.0h"));
    }

    #[test]
    fn test_productive_bonus_uses_category_total() {
        let engine = RewardsEngine::new();
        let usage = vec![
            CategoryUsage::new(AppCategory::Productivity, Duration::minutes(20)),
            CategoryUsage::new(AppCategory::Productivity, Duration::minutes(20)),
            CategoryUsage::new(AppCategory::Productivity, Duration::minutes(20)),
        ];
        // 20 minutes alone floors to zero; the hour total earns 2
        assert_eq!(engine.calculate_app_specific_rewards(&usage).bonus_tokens, 2);
    }

    #[test]
    fn test_neutral_categories_ignored() {
        let engine = RewardsEngine::new();
        let result = engine.calculate_app_specific_rewards(&[
            CategoryUsage::new(AppCategory::Games, Duration::hours(5)),
            CategoryUsage::new(AppCategory::Entertainment, Duration::hours(3)),
        ]);
        assert_eq!(result, AppSpecificRewards::default());
    }

    #[test]
    fn test_mixed_ledger_nets_out() {
        let engine = RewardsEngine::new();
        let result = engine.calculate_app_specific_rewards(&[
            CategoryUsage::new(AppCategory::Productivity, Duration::hours(3)),
            CategoryUsage::new(AppCategory::SocialMedia, Duration::hours(4)),
        ]);
        assert_eq!(result.bonus_tokens, 6);
        assert_eq!(result.penalty_tokens, 6);
        assert_eq!(result.net_tokens, 0);
        let sum: i64 = result.breakdown.iter().map(|e| e.tokens).sum();
        assert_eq!(sum, result.net_tokens);
    }
}
