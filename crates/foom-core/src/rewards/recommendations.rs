//! Rule-based usage hints.

use chrono::Duration;

use super::{RewardsEngine, STREAK_TIERS};
use crate::usage::{duration_hours, AppCategory, CategoryUsage};

/// First streak tier paying more than the entry bonus. Shorter streaks get
/// a nudge toward it.
const STREAK_NUDGE_DAYS: u32 = STREAK_TIERS[1].min_days;

/// Everything the recommendation rules look at for one day.
#[derive(Debug, Clone, Copy)]
pub struct RecommendationInput<'a> {
    pub screen_time: Duration,
    pub goal_hours: f64,
    pub category_usage: &'a [CategoryUsage],
    pub current_streak: u32,
}

impl RewardsEngine {
    /// Up to `max_hints` hints, evaluated in fixed priority order:
    /// overall usage, social media, streak, productive time.
    pub fn generate_recommendations(&self, input: RecommendationInput<'_>) -> Vec<String> {
        let rules = &self.config.recommendations;
        let allowance = self.config.categories.social_free_hours;
        let screen_hours = duration_hours(input.screen_time);

        let social_hours =
            category_hours(input.category_usage, |c| c == AppCategory::SocialMedia);
        let productive_hours = category_hours(input.category_usage, |c| c.is_productive());

        let mut hints = Vec::new();

        if screen_hours > input.goal_hours + rules.over_goal_margin_hours {
            hints.push(format!(
                "You're {:.1} hours over your {:.0}-hour goal. Try setting app timers on your most-used apps.",
                screen_hours - input.goal_hours,
                input.goal_hours
            ));
        }

        if social_hours > allowance {
            hints.push(format!(
                "Social media took {:.1} hours today. Keeping it under {:.0} hours avoids token penalties.",
                social_hours, allowance
            ));
        }

        match input.current_streak {
            0 => hints.push("Meet your goal today to start a new streak.".to_string()),
            streak if streak < STREAK_NUDGE_DAYS => hints.push(format!(
                "You're on a {}-day streak. Reach {} days to unlock a bigger bonus.",
                streak, STREAK_NUDGE_DAYS
            )),
            _ => {}
        }

        if productive_hours < rules.low_productive_hours {
            hints.push(
                "Spend some time in productivity or education apps to earn bonus tokens."
                    .to_string(),
            );
        }

        hints.truncate(rules.max_hints);
        hints
    }
}

fn category_hours(usage: &[CategoryUsage], pred: impl Fn(AppCategory) -> bool) -> f64 {
    usage
        .iter()
        .filter(|u| pred(u.category))
        .map(CategoryUsage::hours)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order_and_cap() {
        let engine = RewardsEngine::new();
        let usage = vec![CategoryUsage::new(
            AppCategory::SocialMedia,
            Duration::hours(5),
        )];
        let hints = engine.generate_recommendations(RecommendationInput {
            screen_time: Duration::hours(12),
            goal_hours: 8.0,
            category_usage: &usage,
            current_streak: 0,
        });

        assert_eq!(hints.len(), 3);
        assert!(hints[0].contains("over your 8-hour goal"));
        assert!(hints[1].contains("Social media took 5.0 hours"));
        assert!(hints[2].contains("start a new streak"));
    }

    #[test]
    fn test_streak_nudge_ends_at_bonus_tier() {
        let engine = RewardsEngine::new();
        let hint_for = |current_streak| {
            engine.generate_recommendations(RecommendationInput {
                screen_time: Duration::hours(4),
                goal_hours: 8.0,
                category_usage: &[],
                current_streak,
            })
        };

        assert!(hint_for(STREAK_NUDGE_DAYS - 1)[0].contains("streak"));
        assert!(!hint_for(STREAK_NUDGE_DAYS)[0].contains("streak"));
        assert!(engine.calculate_streak_bonus(STREAK_NUDGE_DAYS, true) > STREAK_TIERS[0].tokens);
    }

    #[test]
    fn test_social_hint_agrees_with_penalty() {
        let engine = RewardsEngine::new();
        let usage = vec![
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(90)),
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(90)),
        ];
        let hints = engine.generate_recommendations(RecommendationInput {
            screen_time: Duration::hours(4),
            goal_hours: 8.0,
            category_usage: &usage,
            current_streak: 10,
        });

        assert!(hints[0].contains("Social media took 3.0 hours"));
        assert!(engine.calculate_app_specific_rewards(&usage).penalty_tokens > 0);
    }

    #[test]
    fn test_healthy_day_has_no_hints() {
        let engine = RewardsEngine::new();
        let usage = vec![CategoryUsage::new(
            AppCategory::Education,
            Duration::hours(2),
        )];
        let hints = engine.generate_recommendations(RecommendationInput {
            screen_time: Duration::hours(4),
            goal_hours: 8.0,
            category_usage: &usage,
            current_streak: 10,
        });
        assert!(hints.is_empty());
    }

    #[test]
    fn test_low_streak_and_low_productive() {
        let engine = RewardsEngine::new();
        let hints = engine.generate_recommendations(RecommendationInput {
            screen_time: Duration::hours(9),
            goal_hours: 8.0,
            category_usage: &[],
            current_streak: 2,
        });
        assert_eq!(hints.len(), 2);
        assert!(hints[0].contains("2-day streak"));
        assert!(hints[0].contains("Reach 3 days"));
        assert!(hints[1].contains("productivity or education"));
    }
}
