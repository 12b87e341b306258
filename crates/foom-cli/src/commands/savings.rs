use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Subcommand;
use foom_core::{SavingsGoal, SavingsSimulator, ValidationError};
use std::path::{Path, PathBuf};

use super::{load_config, print_json};

#[derive(Subcommand)]
pub enum SavingsAction {
    /// Required savings rate to reach a goal by a date
    Project {
        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: f64,
        /// Goal amount
        #[arg(long)]
        goal: f64,
        /// Target date as YYYY-MM-DD
        #[arg(long)]
        target_date: NaiveDate,
        /// Average tokens earned per day
        #[arg(long, default_value = "0")]
        daily_tokens: f64,
    },
    /// Compound growth of a principal and optional monthly contribution
    Invest {
        #[arg(long)]
        principal: f64,
        /// Annual rate in percent
        #[arg(long, conflicts_with = "fund")]
        rate: Option<f64>,
        /// Take the rate from a configured fund
        #[arg(long)]
        fund: Option<String>,
        /// Horizon in days
        #[arg(long, default_value = "365")]
        days: u32,
        #[arg(long, default_value = "0")]
        monthly: f64,
    },
    /// Project one plan through every configured fund
    Funds {
        #[arg(long)]
        principal: f64,
        #[arg(long, default_value = "365")]
        days: u32,
        #[arg(long, default_value = "0")]
        monthly: f64,
    },
    /// Savings from moving daily usage between two levels
    Convert {
        #[arg(long)]
        current_hours: f64,
        #[arg(long)]
        target_hours: f64,
        /// Daily goal in hours (defaults to the configured goal)
        #[arg(long)]
        goal: Option<f64>,
    },
    /// Standard reduction scenarios for a usage level
    Scenarios {
        #[arg(long)]
        current_hours: f64,
    },
    /// Monthly token savings grown over several years
    LongTerm {
        #[arg(long)]
        monthly_tokens: f64,
        #[arg(long)]
        years: u32,
        /// Annual rate in percent (defaults to the configured rate)
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Split a monthly token budget across goals
    Allocate {
        #[arg(long)]
        monthly_tokens: u64,
        /// JSON file holding an array of savings goals
        #[arg(long)]
        goals: PathBuf,
    },
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn load_goals(path: &Path) -> Result<Vec<SavingsGoal>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let goals: Vec<SavingsGoal> = serde_json::from_str(&content)?;
    for goal in &goals {
        goal.validate()?;
    }
    tracing::debug!(count = goals.len(), path = %path.display(), "loaded savings goals");
    Ok(goals)
}

pub fn run(action: SavingsAction, config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let sim = SavingsSimulator::from_foom_config(&config);

    match action {
        SavingsAction::Project {
            current,
            goal,
            target_date,
            daily_tokens,
        } => {
            let projection = sim.calculate_savings_projection(
                current,
                goal,
                start_of_day(target_date),
                daily_tokens,
                Utc::now(),
            );
            print_json(&projection)?;
        }
        SavingsAction::Invest {
            principal,
            rate,
            fund,
            days,
            monthly,
        } => {
            let rate = match (rate, fund) {
                (Some(rate), _) => rate,
                (None, Some(id)) => {
                    sim.fund(&id)
                        .ok_or_else(|| ValidationError::InvalidValue {
                            field: "fund".into(),
                            message: format!("no fund with id '{id}'"),
                        })?
                        .annual_rate_percent
                }
                (None, None) => {
                    return Err(ValidationError::InvalidValue {
                        field: "rate".into(),
                        message: "pass --rate or --fund".into(),
                    }
                    .into())
                }
            };
            print_json(&sim.calculate_investment_projection(principal, rate, days, monthly))?;
        }
        SavingsAction::Funds {
            principal,
            days,
            monthly,
        } => {
            print_json(&sim.compare_funds(principal, days, monthly, &config.savings.funds))?;
        }
        SavingsAction::Convert {
            current_hours,
            target_hours,
            goal,
        } => {
            let goal = goal.unwrap_or(config.rewards.daily_goal_hours);
            print_json(&sim.calculate_screen_time_to_savings(current_hours, target_hours, goal))?;
        }
        SavingsAction::Scenarios { current_hours } => {
            print_json(&sim.generate_screen_time_scenarios(current_hours))?;
        }
        SavingsAction::LongTerm {
            monthly_tokens,
            years,
            rate,
        } => {
            print_json(&sim.calculate_long_term_savings(monthly_tokens, years, rate))?;
        }
        SavingsAction::Allocate {
            monthly_tokens,
            goals,
        } => {
            let goals = load_goals(&goals)?;
            print_json(&sim.calculate_optimal_allocation(monthly_tokens, &goals, Utc::now()))?;
        }
    }
    Ok(())
}
