//! Integration tests for the savings simulator.

use chrono::{DateTime, Duration, TimeZone, Utc};
use foom_core::{
    FoomConfig, GoalPriority, RewardConfig, SavingsConfig, SavingsGoal, SavingsSimulator,
};
use proptest::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 30, 0).unwrap()
}

fn goal(id: &str, target: f64, current: f64, days: i64) -> SavingsGoal {
    SavingsGoal {
        id: id.to_string(),
        name: format!("Goal {id}"),
        target_amount: target,
        current_amount: current,
        target_date: now() + Duration::days(days),
        is_active: true,
    }
}

#[test]
fn test_lump_sum_projection() {
    let sim = SavingsSimulator::new();
    let p = sim.calculate_investment_projection(1_000.0, 10.0, 365, 0.0);
    assert!((p.projected_value - 1_100.0).abs() < 0.01);
    assert!((p.return_percentage - 10.0).abs() < 0.01);
}

#[test]
fn test_thirty_day_goal_projection() {
    let sim = SavingsSimulator::new();
    let p = sim.calculate_savings_projection(0.0, 10_000.0, now() + Duration::days(30), 20.0, now());

    assert_eq!(p.time_to_goal, 30);
    assert!((p.daily_required - 333.33).abs() < 0.01);
    assert!(p.monthly_token_savings < p.monthly_required);
    assert!(!p.recommendations.is_empty());
}

#[test]
fn test_projection_is_deterministic() {
    let sim = SavingsSimulator::new();
    let target = now() + Duration::days(90);
    let a = sim.calculate_savings_projection(1_500.0, 20_000.0, target, 35.0, now());
    let b = sim.calculate_savings_projection(1_500.0, 20_000.0, target, 35.0, now());
    assert_eq!(a, b);

    let x = sim.calculate_long_term_savings(750.0, 10, Some(11.0));
    let y = sim.calculate_long_term_savings(750.0, 10, Some(11.0));
    assert_eq!(x, y);
}

#[test]
fn test_fund_catalog_from_config() {
    let config = FoomConfig::default();
    let sim = SavingsSimulator::from_foom_config(&config);
    let results = sim.compare_funds(500.0, 730, 100.0, &config.savings.funds);

    assert_eq!(results.len(), config.savings.funds.len());
    assert!(results[0].eligible);
    assert!(results.iter().skip(1).all(|r| !r.eligible));
    assert!(results.iter().all(|r| r.projection.projected_value.is_finite()));
}

#[test]
fn test_screen_time_savings_uses_reward_rate() {
    let rewards = RewardConfig {
        tokens_per_hour: 20.0,
        ..Default::default()
    };
    let savings = SavingsConfig {
        kes_per_token: 0.25,
        ..Default::default()
    };
    let sim = SavingsSimulator::with_config(savings, rewards);
    let s = sim.calculate_screen_time_to_savings(7.0, 5.0, 8.0);

    assert_eq!(s.daily_tokens_gained, 40);
    assert_eq!(s.monthly_tokens_gained, 1_200);
    assert_eq!(s.monthly_savings, 300.0);
    assert_eq!(s.annual_savings, 3_600.0);
}

#[test]
fn test_overdue_goal_is_most_urgent() {
    let sim = SavingsSimulator::new();
    let goals = vec![
        goal("soon", 2_000.0, 0.0, 25),
        goal("overdue", 1_000.0, 100.0, -10),
        goal("far", 50_000.0, 0.0, 400),
    ];
    let result = sim.calculate_optimal_allocation(1_500, &goals, now());

    assert_eq!(result.allocations[0].goal_id, "overdue");
    assert_eq!(result.allocations[0].priority, GoalPriority::High);
    assert!(result.allocations[0].urgency_days < 0);
    assert_eq!(result.allocations[0].allocated_tokens, 900);
    assert_eq!(result.allocations[1].goal_id, "soon");
    assert_eq!(result.allocations[1].allocated_tokens, 600);
    assert_eq!(result.total_allocated + result.remaining_tokens, 1_500);
}

#[test]
fn test_zero_budget_allocation() {
    let sim = SavingsSimulator::new();
    let goals = vec![goal("a", 1_000.0, 0.0, 10), goal("b", 5_000.0, 0.0, 100)];
    let result = sim.calculate_optimal_allocation(0, &goals, now());
    assert!(result.allocations.is_empty());
    assert_eq!(result.remaining_tokens, 0);
}

fn arb_goal() -> impl Strategy<Value = SavingsGoal> {
    (
        "[a-z]{1,8}",
        1.0f64..100_000.0,
        0.0f64..120_000.0,
        -60i64..720,
        any::<bool>(),
    )
        .prop_map(|(id, target, current, days, is_active)| SavingsGoal {
            is_active,
            ..goal(&id, target, current, days)
        })
}

proptest! {
    #[test]
    fn prop_allocation_conserves_tokens(
        monthly_tokens in 0u64..50_000,
        kes_per_token in 0.1f64..5.0,
        goals in proptest::collection::vec(arb_goal(), 0..8),
    ) {
        let config = SavingsConfig { kes_per_token, ..Default::default() };
        let sim = SavingsSimulator::with_config(config, RewardConfig::default());
        let result = sim.calculate_optimal_allocation(monthly_tokens, &goals, now());

        prop_assert_eq!(result.total_allocated + result.remaining_tokens, monthly_tokens);
        let summed: u64 = result.allocations.iter().map(|a| a.allocated_tokens).sum();
        prop_assert_eq!(summed, result.total_allocated);
        prop_assert!(result.allocations.iter().all(|a| a.allocated_tokens > 0));
    }

    #[test]
    fn prop_investment_is_finite(
        principal in 0.0f64..1_000_000.0,
        rate in 0.0f64..30.0,
        days in 0u32..3_650,
        contribution in 0.0f64..10_000.0,
    ) {
        let sim = SavingsSimulator::new();
        let p = sim.calculate_investment_projection(principal, rate, days, contribution);
        prop_assert!(p.projected_value.is_finite());
        prop_assert!(p.return_percentage.is_finite());
        prop_assert!(p.projected_value + 1e-6 >= principal);
    }
}
