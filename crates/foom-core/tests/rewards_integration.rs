//! Integration tests for the rewards engine.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use foom_core::usage::{aggregate_by_category, total_screen_time};
use foom_core::{
    AppCategory, CategoryUsage, PerformanceRating, RecommendationInput, RewardConfig, RewardKind,
    RewardsEngine, UsageSample,
};
use proptest::prelude::*;

fn hours(h: f64) -> Duration {
    Duration::milliseconds((h * 3_600_000.0).round() as i64)
}

#[test]
fn test_zero_usage_day() {
    let engine = RewardsEngine::new();
    let result = engine.calculate_daily_reward(Duration::zero(), 8.0, 0);

    assert_eq!(result.tokens_earned, 8 * 10);
    assert_eq!(result.streak_bonus, 0);
    assert_eq!(result.milestone_bonus, 20);
    assert_eq!(result.total_reward, 100);
}

#[test]
fn test_full_day_workflow_from_samples() {
    let engine = RewardsEngine::new();
    let now = Utc.with_ymd_and_hms(2026, 9, 14, 21, 0, 0).unwrap();

    let samples = vec![
        UsageSample {
            app_identifier: "com.instagram.android".into(),
            category: AppCategory::SocialMedia,
            time_spent: Duration::minutes(150),
            last_used: now,
        },
        UsageSample {
            app_identifier: "org.khanacademy".into(),
            category: AppCategory::Education,
            time_spent: Duration::minutes(90),
            last_used: now,
        },
        UsageSample {
            app_identifier: "com.whatsapp".into(),
            category: AppCategory::Communication,
            time_spent: Duration::minutes(60),
            last_used: now,
        },
    ];

    let screen_time = total_screen_time(&samples);
    assert_eq!(screen_time, Duration::hours(5));

    let daily = engine.calculate_daily_reward(screen_time, 8.0, 3);
    assert_eq!(daily.tokens_earned, 30);
    assert_eq!(daily.streak_bonus, 5);
    assert_eq!(daily.milestone_bonus, 10);

    let usage = aggregate_by_category(&samples);
    let apps = engine.calculate_app_specific_rewards(&usage);
    assert_eq!(apps.bonus_tokens, 3); // 1.5h education
    assert_eq!(apps.penalty_tokens, 1); // 0.5h over allowance
    assert!(apps.breakdown.iter().all(|e| e.kind == RewardKind::Category));

    let event = engine
        .calculate_event_bonus(now.date_naive())
        .expect("September event");
    let boosted = engine.apply_event_bonus(daily.total_reward + apps.net_tokens, &event);
    assert_eq!(boosted, 70); // (45 + 2) * 1.5 = 70.5

    let hints = engine.generate_recommendations(RecommendationInput {
        screen_time,
        goal_hours: 8.0,
        category_usage: &usage,
        current_streak: 3,
    });
    assert_eq!(hints.len(), 1);
    assert!(hints[0].contains("Social media"));
}

#[test]
fn test_millisecond_input_contract() {
    let engine = RewardsEngine::new();
    let usage = vec![
        CategoryUsage::from_millis("productivity", 2 * 3_600_000),
        CategoryUsage::from_millis("social", 5 * 3_600_000),
    ];
    let result = engine.calculate_app_specific_rewards(&usage);
    assert_eq!(result.category_breakdown[&AppCategory::Productivity], 4);
    assert_eq!(result.category_breakdown[&AppCategory::SocialMedia], -9);
    assert_eq!(result.net_tokens, -5);
}

#[test]
fn test_week_of_perfect_days() {
    let engine = RewardsEngine::new();
    let week = engine.calculate_weekly_performance(&[hours(3.0); 7]);

    assert_eq!(week.streak_data.current_streak, 7);
    assert_eq!(week.streak_data.longest_streak, 7);
    assert_eq!(week.goals_met_count, 7);
    assert_eq!(week.performance, PerformanceRating::Excellent);
}

#[test]
fn test_week_uses_configured_goal() {
    let config = RewardConfig {
        daily_goal_hours: 4.0,
        ..Default::default()
    };
    let engine = RewardsEngine::with_config(config);
    let week = engine.calculate_weekly_performance(&[hours(5.0), hours(3.0), hours(6.0), hours(2.0)]);

    assert_eq!(week.goals_met_count, 2);
    assert_eq!(week.streak_data.longest_streak, 1);
    assert_eq!(week.performance, PerformanceRating::Good);
}

#[test]
fn test_weekly_challenges_payout() {
    let engine = RewardsEngine::new();
    let now = Utc.with_ymd_and_hms(2026, 1, 5, 9, 0, 0).unwrap();
    let mut challenges = engine.generate_weekly_challenges(now);
    for c in &mut challenges {
        c.current_value = c.target_value;
        c.is_completed = true;
    }
    let total: i64 = challenges
        .iter()
        .map(|c| engine.calculate_challenge_reward(c))
        .sum();
    assert_eq!(total, 112 + 75);
}

#[test]
fn test_event_outside_window() {
    let engine = RewardsEngine::new();
    let date = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    assert!(engine.calculate_event_bonus(date).is_none());
}

proptest! {
    #[test]
    fn prop_goal_met_iff_within_goal(minutes in 0i64..1_440, goal in 1u32..16) {
        let engine = RewardsEngine::new();
        let goal_hours = goal as f64;
        let result = engine.calculate_daily_reward(Duration::minutes(minutes), goal_hours, 0);
        prop_assert_eq!(result.daily_goal_met, minutes as f64 / 60.0 <= goal_hours);
    }

    #[test]
    fn prop_total_is_sum_of_breakdown(minutes in -600i64..1_440, streak in 0u32..60) {
        let engine = RewardsEngine::new();
        let result = engine.calculate_daily_reward(Duration::minutes(minutes), 8.0, streak);
        let sum: i64 = result.breakdown.iter().map(|e| e.tokens).sum();
        prop_assert_eq!(result.total_reward, sum);
        prop_assert!(result.hours_under_goal >= 0.0);
    }

    #[test]
    fn prop_weekly_streak_invariants(days in proptest::collection::vec(0i64..900, 0..14)) {
        let engine = RewardsEngine::new();
        let durations: Vec<Duration> = days.iter().map(|m| Duration::minutes(*m)).collect();
        let week = engine.calculate_weekly_performance(&durations);
        prop_assert!(week.streak_data.longest_streak >= week.streak_data.current_streak);
        prop_assert!(week.goals_met_count as usize <= durations.len());
        prop_assert_eq!(week.streak_data.goals_met_count, week.goals_met_count);
    }
}
