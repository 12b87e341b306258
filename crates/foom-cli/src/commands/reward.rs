use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use foom_core::{CategoryUsage, RecommendationInput, RewardsEngine, ValidationError};
use std::path::Path;

use super::{hours_to_duration, load_config, print_json};

#[derive(Subcommand)]
pub enum RewardAction {
    /// Reward for a single day
    Daily {
        /// Screen time for the day in hours
        #[arg(long)]
        hours: f64,
        /// Daily goal in hours (defaults to the configured goal)
        #[arg(long)]
        goal: Option<f64>,
        /// Consecutive goal-met days before today
        #[arg(long, default_value = "0")]
        streak: u32,
    },
    /// Performance over a sequence of days
    Weekly {
        /// Daily screen time in hours, oldest first
        hours: Vec<f64>,
    },
    /// Today's or this week's challenges
    Challenges {
        /// Generate the weekly catalog instead of the daily one
        #[arg(long)]
        weekly: bool,
    },
    /// Per-category bonuses and penalties
    Apps {
        /// Usage as category=minutes pairs (e.g. social_media=150)
        usage: Vec<String>,
    },
    /// Usage hints for a day
    Recommend {
        /// Screen time for the day in hours
        #[arg(long)]
        hours: f64,
        /// Daily goal in hours (defaults to the configured goal)
        #[arg(long)]
        goal: Option<f64>,
        /// Current streak in days
        #[arg(long, default_value = "0")]
        streak: u32,
        /// Usage as category=minutes pairs
        usage: Vec<String>,
    },
    /// Seasonal event active on a date
    Event {
        /// Date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Parse `category=minutes` pairs into category totals.
fn parse_usage(pairs: &[String]) -> Result<Vec<CategoryUsage>, ValidationError> {
    pairs
        .iter()
        .map(|pair| {
            let (category, minutes) = pair.split_once('=').ok_or_else(|| {
                ValidationError::InvalidValue {
                    field: "usage".into(),
                    message: format!("expected category=minutes, got '{pair}'"),
                }
            })?;
            let minutes: i64 = minutes.trim().parse().map_err(|_| ValidationError::InvalidValue {
                field: "usage".into(),
                message: format!("'{minutes}' is not a whole number of minutes"),
            })?;
            Ok(CategoryUsage::from_millis(category, minutes * 60_000))
        })
        .collect()
}

pub fn run(action: RewardAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let default_goal = config.rewards.daily_goal_hours;
    let engine = RewardsEngine::with_config(config.rewards);

    match action {
        RewardAction::Daily {
            hours,
            goal,
            streak,
        } => {
            let result =
                engine.calculate_daily_reward(hours_to_duration(hours), goal.unwrap_or(default_goal), streak);
            print_json(&result)?;
        }
        RewardAction::Weekly { hours } => {
            let days: Vec<_> = hours.into_iter().map(hours_to_duration).collect();
            print_json(&engine.calculate_weekly_performance(&days))?;
        }
        RewardAction::Challenges { weekly } => {
            let now = Utc::now();
            let challenges = if weekly {
                engine.generate_weekly_challenges(now)
            } else {
                engine.generate_daily_challenges(now)
            };
            print_json(&challenges)?;
        }
        RewardAction::Apps { usage } => {
            let usage = parse_usage(&usage)?;
            print_json(&engine.calculate_app_specific_rewards(&usage))?;
        }
        RewardAction::Recommend {
            hours,
            goal,
            streak,
            usage,
        } => {
            let usage = parse_usage(&usage)?;
            let hints = engine.generate_recommendations(RecommendationInput {
                screen_time: hours_to_duration(hours),
                goal_hours: goal.unwrap_or(default_goal),
                category_usage: &usage,
                current_streak: streak,
            });
            print_json(&hints)?;
        }
        RewardAction::Event { date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            print_json(&engine.calculate_event_bonus(date))?;
        }
    }
    Ok(())
}
