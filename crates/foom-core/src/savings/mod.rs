//! Savings and investment simulator.
//!
//! Projects token-earning rates and money-market fund parameters into
//! time-to-goal figures, compound-growth projections and allocations of a
//! monthly token budget across concurrent savings goals. Like the rewards
//! engine it performs no I/O and reads no clock: every "now" is a parameter.
//!
//! Months are approximated as 30 days and years as 365 days throughout.

mod allocation;
mod fund;
mod investment;
mod projection;
mod screen_time;

pub use allocation::{GoalAllocation, GoalPriority, OptimalAllocation, SavingsGoal};
pub use fund::{FundComparison, FundOption, RiskLevel};
pub use investment::{InvestmentProjection, LongTermSavings, YearlySavings};
pub use projection::SavingsProjection;
pub use screen_time::{ScenarioDifficulty, ScreenTimeScenario, ScreenTimeToSavings};

use crate::config::{FoomConfig, RewardConfig, SavingsConfig};

pub(crate) const DAYS_PER_MONTH: f64 = 30.0;
pub(crate) const DAYS_PER_YEAR: f64 = 365.0;
pub(crate) const MONTHS_PER_YEAR: f64 = 12.0;

/// Future value of an ordinary annuity.
///
/// A zero rate degenerates to `payment * periods` instead of dividing by zero.
pub fn future_value_of_annuity(payment: f64, rate_per_period: f64, periods: f64) -> f64 {
    if rate_per_period == 0.0 {
        payment * periods
    } else {
        payment * ((1.0 + rate_per_period).powf(periods) - 1.0) / rate_per_period
    }
}

/// Stateless savings calculator.
///
/// Carries the reward constants too, so screen-time projections use the
/// exact base-reward formula the rewards engine pays out.
#[derive(Debug, Clone, Default)]
pub struct SavingsSimulator {
    config: SavingsConfig,
    rewards: RewardConfig,
}

impl SavingsSimulator {
    /// Create a simulator with the default constants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator with custom constants.
    pub fn with_config(config: SavingsConfig, rewards: RewardConfig) -> Self {
        Self { config, rewards }
    }

    pub fn from_foom_config(config: &FoomConfig) -> Self {
        Self::with_config(config.savings.clone(), config.rewards.clone())
    }

    pub fn config(&self) -> &SavingsConfig {
        &self.config
    }

    /// Currency value of a token amount.
    pub fn tokens_to_kes(&self, tokens: f64) -> f64 {
        tokens * self.config.kes_per_token
    }

    /// Whole tokens purchasable with a currency amount. Fractions are dropped.
    pub fn kes_to_tokens(&self, kes: f64) -> u64 {
        if !(kes > 0.0) {
            return 0;
        }
        (kes / self.config.kes_per_token).floor() as u64
    }
}
