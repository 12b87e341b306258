//! # FOOM Core Library
//!
//! This library provides the computational core of FOOM, a screen-time app
//! that rewards users with virtual tokens for reducing device usage and lets
//! them simulate investing those tokens into money-market funds. It follows
//! a CLI-first layout: every calculation is reachable from the standalone
//! `foom-cli` binary, and any client can embed the same library.
//!
//! ## Architecture
//!
//! - **Rewards Engine**: turns daily screen time, goals and streak state into
//!   token rewards with an auditable breakdown, plus challenges,
//!   recommendations and seasonal events
//! - **Savings Simulator**: time-to-goal, compound growth, screen-time to
//!   savings conversion and goal allocation
//! - **Config**: TOML-backed constants shared by both engines
//!
//! Both engines are pure: identical inputs give identical outputs, no I/O is
//! performed and the current time is always passed in by the caller.
//!
//! ## Key Components
//!
//! - [`RewardsEngine`]: Daily/weekly rewards and challenges
//! - [`SavingsSimulator`]: Projections and allocations
//! - [`FoomConfig`]: Engine configuration management

pub mod config;
pub mod error;
pub mod rewards;
pub mod savings;
pub mod usage;

pub use config::{FoomConfig, RewardConfig, SavingsConfig};
pub use error::{ConfigError, CoreError, ValidationError};
pub use rewards::{
    AppSpecificRewards, Challenge, ChallengeKind, EventBonus, MilestoneTier, PerformanceRating,
    RecommendationInput, RewardBreakdownEntry, RewardKind, RewardResult, RewardsEngine,
    StreakState, StreakTier, WeeklyPerformance, MILESTONE_TIERS, STREAK_TIERS,
};
pub use savings::{
    FundComparison, FundOption, GoalAllocation, GoalPriority, InvestmentProjection,
    LongTermSavings, OptimalAllocation, RiskLevel, SavingsGoal, SavingsProjection,
    SavingsSimulator, ScenarioDifficulty, ScreenTimeScenario, ScreenTimeToSavings, YearlySavings,
};
pub use usage::{AppCategory, CategoryUsage, UsageSample};
