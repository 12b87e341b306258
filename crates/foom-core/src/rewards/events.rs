//! Seasonal reward events.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RewardsEngine;

/// An active seasonal multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventBonus {
    pub event_name: String,
    pub bonus_multiplier: f64,
    pub description: String,
}

impl RewardsEngine {
    /// Seasonal event running on `date`: all of January and all of September.
    pub fn calculate_event_bonus(&self, date: NaiveDate) -> Option<EventBonus> {
        let (event_name, bonus_multiplier, description) = match date.month() {
            1 => (
                "New Year Digital Detox",
                2.0,
                "Start the year with less screen time: all rewards doubled in January",
            ),
            9 => (
                "Back to Focus",
                1.5,
                "Back-to-school season: rewards earn 1.5x through September",
            ),
            _ => return None,
        };

        Some(EventBonus {
            event_name: event_name.to_string(),
            bonus_multiplier,
            description: description.to_string(),
        })
    }

    /// Scale a token amount by an event multiplier, rounding down.
    pub fn apply_event_bonus(&self, tokens: i64, event: &EventBonus) -> i64 {
        (tokens as f64 * event.bonus_multiplier).floor() as i64
    }
}
