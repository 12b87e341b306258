//! Money-market fund catalog.

use serde::{Deserialize, Serialize};

use super::{InvestmentProjection, SavingsSimulator};
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// A simulated fund with a fixed annual rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundOption {
    pub id: String,
    pub name: String,
    pub annual_rate_percent: f64,
    pub min_investment: f64,
    pub risk_level: RiskLevel,
}

impl FundOption {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        annual_rate_percent: f64,
        min_investment: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            annual_rate_percent,
            min_investment,
            risk_level,
        }
    }

    /// The catalog shipped when no configuration overrides it.
    pub fn default_catalog() -> Vec<FundOption> {
        vec![
            FundOption::new("stable-mmf", "Stable Money Market Fund", 9.5, 100.0, RiskLevel::Low),
            FundOption::new("income-plus", "Income Plus Fund", 11.0, 1_000.0, RiskLevel::Medium),
            FundOption::new("growth-equity", "Growth Equity Fund", 14.0, 5_000.0, RiskLevel::High),
        ]
    }

    /// Whether `amount` meets the fund's minimum investment.
    pub fn accepts(&self, amount: f64) -> bool {
        amount >= self.min_investment
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::invalid("fund.id", "must not be empty"));
        }
        if !(self.annual_rate_percent > 0.0) {
            return Err(ValidationError::invalid(
                format!("fund.{}.annual_rate_percent", self.id),
                "must be positive",
            ));
        }
        if !(self.min_investment > 0.0) {
            return Err(ValidationError::invalid(
                format!("fund.{}.min_investment", self.id),
                "must be positive",
            ));
        }
        Ok(())
    }
}

/// A fund's projection for a given plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundComparison {
    pub fund_id: String,
    pub fund_name: String,
    pub risk_level: RiskLevel,
    /// Principal meets the fund's minimum investment
    pub eligible: bool,
    pub projection: InvestmentProjection,
}

impl SavingsSimulator {
    /// Look up a fund in the configured catalog.
    pub fn fund(&self, id: &str) -> Option<&FundOption> {
        self.config.funds.iter().find(|f| f.id == id)
    }

    /// Project the same plan through every fund in `funds`, in catalog order.
    pub fn compare_funds(
        &self,
        principal: f64,
        time_horizon_days: u32,
        monthly_contribution: f64,
        funds: &[FundOption],
    ) -> Vec<FundComparison> {
        funds
            .iter()
            .map(|fund| FundComparison {
                fund_id: fund.id.clone(),
                fund_name: fund.name.clone(),
                risk_level: fund.risk_level,
                eligible: fund.accepts(principal),
                projection: self.calculate_investment_projection(
                    principal,
                    fund.annual_rate_percent,
                    time_horizon_days,
                    monthly_contribution,
                ),
            })
            .collect()
    }
}
