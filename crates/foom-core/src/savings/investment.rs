//! Compound-growth projections.

use serde::{Deserialize, Serialize};

use super::{future_value_of_annuity, SavingsSimulator, DAYS_PER_MONTH, DAYS_PER_YEAR, MONTHS_PER_YEAR};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentProjection {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub time_horizon_days: u32,
    pub monthly_contribution: f64,
    pub projected_value: f64,
    pub total_contributions: f64,
    /// Growth beyond principal and contributions
    pub total_return: f64,
    /// `total_return` relative to principal only
    pub return_percentage: f64,
}

/// Balance at the end of one year of a long-term plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySavings {
    pub year: u32,
    pub total_contributed: f64,
    pub projected_value: f64,
    pub interest_earned: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LongTermSavings {
    pub monthly_tokens: f64,
    pub monthly_contribution: f64,
    pub years: u32,
    pub annual_rate_percent: f64,
    pub total_contributed: f64,
    pub projected_value: f64,
    pub interest_earned: f64,
    pub yearly_breakdown: Vec<YearlySavings>,
}

impl SavingsSimulator {
    /// Project a principal (and optional monthly contribution) through a
    /// fixed annual rate.
    ///
    /// Without contributions the principal compounds annually over
    /// `days / 365` years. With contributions both the principal and an
    /// ordinary annuity compound monthly over `days / 30` months.
    pub fn calculate_investment_projection(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        time_horizon_days: u32,
        monthly_contribution: f64,
    ) -> InvestmentProjection {
        let rate = annual_rate_percent / 100.0;
        let months = time_horizon_days as f64 / DAYS_PER_MONTH;

        let (projected_value, total_contributions) = if monthly_contribution == 0.0 {
            let years = time_horizon_days as f64 / DAYS_PER_YEAR;
            (principal * (1.0 + rate).powf(years), 0.0)
        } else {
            let monthly_rate = rate / MONTHS_PER_YEAR;
            let annuity = future_value_of_annuity(monthly_contribution, monthly_rate, months);
            let compounded_principal = principal * (1.0 + monthly_rate).powf(months);
            (annuity + compounded_principal, monthly_contribution * months)
        };

        let total_return = projected_value - principal - total_contributions;
        let return_percentage = if principal > 0.0 {
            total_return / principal * 100.0
        } else {
            0.0
        };

        InvestmentProjection {
            principal,
            annual_rate_percent,
            time_horizon_days,
            monthly_contribution,
            projected_value,
            total_contributions,
            total_return,
            return_percentage,
        }
    }

    /// Grow a steady monthly token income, converted to currency, for
    /// `years` years with monthly compounding. `None` uses the configured
    /// default rate.
    pub fn calculate_long_term_savings(
        &self,
        monthly_tokens: f64,
        years: u32,
        average_rate_percent: Option<f64>,
    ) -> LongTermSavings {
        let annual_rate_percent =
            average_rate_percent.unwrap_or(self.config.default_long_term_rate_percent);
        let monthly_rate = annual_rate_percent / 100.0 / MONTHS_PER_YEAR;
        let monthly_contribution = self.tokens_to_kes(monthly_tokens);

        let yearly_breakdown: Vec<YearlySavings> = (1..=years)
            .map(|year| {
                let months = year as f64 * MONTHS_PER_YEAR;
                let projected_value = future_value_of_annuity(monthly_contribution, monthly_rate, months);
                let total_contributed = monthly_contribution * months;
                YearlySavings {
                    year,
                    total_contributed,
                    projected_value,
                    interest_earned: projected_value - total_contributed,
                }
            })
            .collect();

        let (total_contributed, projected_value) = yearly_breakdown
            .last()
            .map_or((0.0, 0.0), |y| (y.total_contributed, y.projected_value));

        LongTermSavings {
            monthly_tokens,
            monthly_contribution,
            years,
            annual_rate_percent,
            total_contributed,
            projected_value,
            interest_earned: projected_value - total_contributed,
            yearly_breakdown,
        }
    }
}
