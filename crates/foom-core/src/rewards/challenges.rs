//! Daily and weekly challenge catalogs.
//!
//! Challenges are generated fresh from a fixed catalog. Progress and
//! completion are tracked by the caller; the engine only prices a challenge
//! once it has been marked complete.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{RewardBreakdownEntry, RewardKind, RewardsEngine};

/// Unit of a challenge's `target_value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeKind {
    /// Done or not done (target 1)
    Binary,
    /// A duration in minutes
    Minutes,
    /// A count of days
    Days,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ChallengeKind,
    pub target_value: f64,
    pub current_value: f64,
    pub reward: i64,
    pub is_completed: bool,
    pub expires_at: DateTime<Utc>,
}

impl Challenge {
    fn from_template(template: &ChallengeTemplate, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: template.id.to_string(),
            title: template.title.to_string(),
            description: template.description.to_string(),
            kind: template.kind,
            target_value: template.target_value,
            current_value: 0.0,
            reward: template.reward,
            is_completed: false,
            expires_at,
        }
    }

    /// Progress toward the target, between 0.0 and 1.0.
    pub fn progress(&self) -> f64 {
        if self.target_value <= 0.0 {
            return if self.is_completed { 1.0 } else { 0.0 };
        }
        (self.current_value / self.target_value).clamp(0.0, 1.0)
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

struct ChallengeTemplate {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    kind: ChallengeKind,
    target_value: f64,
    reward: i64,
}

const DAILY_CATALOG: [ChallengeTemplate; 3] = [
    ChallengeTemplate {
        id: "daily_social_free_morning",
        title: "Social-free morning",
        description: "Stay off social media apps until noon",
        kind: ChallengeKind::Binary,
        target_value: 1.0,
        reward: 15,
    },
    ChallengeTemplate {
        id: "daily_beat_goal",
        title: "Beat your goal",
        description: "Finish the day under your screen-time goal",
        kind: ChallengeKind::Binary,
        target_value: 1.0,
        reward: 20,
    },
    ChallengeTemplate {
        id: "daily_two_hour_unplug",
        title: "Two-hour unplug",
        description: "Go 120 minutes in a row without unlocking your phone",
        kind: ChallengeKind::Minutes,
        target_value: 120.0,
        reward: 25,
    },
];

const WEEKLY_CATALOG: [ChallengeTemplate; 2] = [
    ChallengeTemplate {
        id: "weekly_five_day_streak",
        title: "Five-day streak",
        description: "Meet your daily goal on 5 days this week",
        kind: ChallengeKind::Days,
        target_value: 5.0,
        reward: 75,
    },
    ChallengeTemplate {
        id: "weekly_social_under_an_hour",
        title: "Social under an hour",
        description: "Keep social media under 60 minutes every day for a week",
        kind: ChallengeKind::Days,
        target_value: 7.0,
        reward: 50,
    },
];

impl RewardsEngine {
    /// Today's challenges, expiring one day after `now`.
    pub fn generate_daily_challenges(&self, now: DateTime<Utc>) -> Vec<Challenge> {
        let expires_at = now + Duration::days(1);
        DAILY_CATALOG
            .iter()
            .map(|t| Challenge::from_template(t, expires_at))
            .collect()
    }

    /// This week's challenges, expiring seven days after `now`.
    pub fn generate_weekly_challenges(&self, now: DateTime<Utc>) -> Vec<Challenge> {
        let expires_at = now + Duration::days(7);
        WEEKLY_CATALOG
            .iter()
            .map(|t| Challenge::from_template(t, expires_at))
            .collect()
    }

    /// Payout for a challenge. Larger rewards select a larger multiplier.
    pub fn calculate_challenge_reward(&self, challenge: &Challenge) -> i64 {
        if !challenge.is_completed {
            return 0;
        }
        let multiplier = self
            .config
            .challenge_multipliers
            .iter()
            .filter(|m| challenge.reward >= m.min_reward)
            .max_by_key(|m| m.min_reward)
            .map_or(1.0, |m| m.multiplier);

        (challenge.reward as f64 * multiplier).floor() as i64
    }

    /// Breakdown line for a completed challenge, if it pays anything.
    pub fn challenge_breakdown_entry(&self, challenge: &Challenge) -> Option<RewardBreakdownEntry> {
        let tokens = self.calculate_challenge_reward(challenge);
        (tokens > 0).then(|| {
            RewardBreakdownEntry::new(
                RewardKind::Challenge,
                format!("Challenge: {}", challenge.title),
                tokens,
            )
        })
    }
}
