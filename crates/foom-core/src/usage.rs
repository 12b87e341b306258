//! Usage metering input types.
//!
//! Samples are produced by the platform usage-stats bridge once per polling
//! interval. The engines only ever see per-category totals derived here.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// App category as reported by the usage bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppCategory {
    Productivity,
    Education,
    SocialMedia,
    Entertainment,
    Games,
    Communication,
    Other,
}

impl AppCategory {
    /// Parse a free-form category label. Unknown labels map to `Other`.
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();

        match normalized.as_str() {
            "productivity" | "work" | "tools" => AppCategory::Productivity,
            "education" | "learning" => AppCategory::Education,
            "social" | "socialmedia" => AppCategory::SocialMedia,
            "entertainment" | "video" | "streaming" => AppCategory::Entertainment,
            "games" | "game" | "gaming" => AppCategory::Games,
            "communication" | "messaging" | "chat" => AppCategory::Communication,
            _ => AppCategory::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AppCategory::Productivity => "productivity",
            AppCategory::Education => "education",
            AppCategory::SocialMedia => "social_media",
            AppCategory::Entertainment => "entertainment",
            AppCategory::Games => "games",
            AppCategory::Communication => "communication",
            AppCategory::Other => "other",
        }
    }

    /// Productivity and education apps earn bonus tokens.
    pub fn is_productive(&self) -> bool {
        matches!(self, AppCategory::Productivity | AppCategory::Education)
    }
}

impl std::fmt::Display for AppCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One polling-interval reading for a single app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSample {
    pub app_identifier: String,
    pub category: AppCategory,
    #[serde(rename = "time_spent_ms", with = "duration_ms")]
    pub time_spent: Duration,
    pub last_used: DateTime<Utc>,
}

/// Aggregated time for one category over a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryUsage {
    pub category: AppCategory,
    #[serde(rename = "time_spent_ms", with = "duration_ms")]
    pub time_spent: Duration,
}

impl CategoryUsage {
    pub fn new(category: AppCategory, time_spent: Duration) -> Self {
        Self {
            category,
            time_spent,
        }
    }

    /// Build from the bridge's `{category, timeSpentMilliseconds}` shape.
    pub fn from_millis(category: &str, time_spent_ms: i64) -> Self {
        Self::new(
            AppCategory::from_label(category),
            Duration::milliseconds(time_spent_ms),
        )
    }

    pub fn hours(&self) -> f64 {
        duration_hours(self.time_spent)
    }
}

/// Serde adapter storing a `Duration` as whole milliseconds.
pub mod duration_ms {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_i64(d.num_milliseconds())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        i64::deserialize(d).map(Duration::milliseconds)
    }
}

/// Duration in fractional hours. Negative readings clamp to zero.
pub fn duration_hours(d: Duration) -> f64 {
    (d.num_milliseconds().max(0)) as f64 / 3_600_000.0
}

/// Sum samples per category, ordered by first appearance.
pub fn aggregate_by_category(samples: &[UsageSample]) -> Vec<CategoryUsage> {
    let mut totals = Vec::new();
    for sample in samples {
        add_usage(&mut totals, sample.category, sample.time_spent);
    }
    totals
}

/// Collapse per-app entries into one total per category, ordered by first
/// appearance. Negative readings count as zero.
pub fn merge_category_usage(usage: &[CategoryUsage]) -> Vec<CategoryUsage> {
    let mut totals = Vec::new();
    for entry in usage {
        add_usage(&mut totals, entry.category, entry.time_spent.max(Duration::zero()));
    }
    totals
}

fn add_usage(totals: &mut Vec<CategoryUsage>, category: AppCategory, time_spent: Duration) {
    match totals.iter_mut().find(|t| t.category == category) {
        Some(total) => total.time_spent = total.time_spent + time_spent,
        None => totals.push(CategoryUsage::new(category, time_spent)),
    }
}

/// Total screen time across all samples.
pub fn total_screen_time(samples: &[UsageSample]) -> Duration {
    samples
        .iter()
        .fold(Duration::zero(), |acc, s| acc + s.time_spent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(app: &str, category: AppCategory, minutes: i64) -> UsageSample {
        UsageSample {
            app_identifier: app.to_string(),
            category,
            time_spent: Duration::minutes(minutes),
            last_used: Utc::now(),
        }
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(AppCategory::from_label("Social Media"), AppCategory::SocialMedia);
        assert_eq!(AppCategory::from_label("social_media"), AppCategory::SocialMedia);
        assert_eq!(AppCategory::from_label("EDUCATION"), AppCategory::Education);
        assert_eq!(AppCategory::from_label("weather"), AppCategory::Other);
        assert!(AppCategory::Productivity.is_productive());
        assert!(!AppCategory::Games.is_productive());
    }

    #[test]
    fn test_aggregate_by_category() {
        let samples = vec![
            sample("com.instagram", AppCategory::SocialMedia, 30),
            sample("com.notion", AppCategory::Productivity, 45),
            sample("com.tiktok", AppCategory::SocialMedia, 90),
        ];

        let totals = aggregate_by_category(&samples);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, AppCategory::SocialMedia);
        assert_eq!(totals[0].time_spent, Duration::minutes(120));
        assert_eq!(totals[1].time_spent, Duration::minutes(45));
        assert_eq!(total_screen_time(&samples), Duration::minutes(165));
    }

    #[test]
    fn test_merge_category_usage() {
        let usage = vec![
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(90)),
            CategoryUsage::new(AppCategory::Education, Duration::minutes(20)),
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(90)),
            CategoryUsage::new(AppCategory::SocialMedia, Duration::minutes(-30)),
        ];

        let totals = merge_category_usage(&usage);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, AppCategory::SocialMedia);
        assert_eq!(totals[0].time_spent, Duration::minutes(180));
        assert_eq!(totals[1].time_spent, Duration::minutes(20));
    }

    #[test]
    fn test_from_millis() {
        let usage = CategoryUsage::from_millis("productivity", 5_400_000);
        assert_eq!(usage.category, AppCategory::Productivity);
        assert!((usage.hours() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_usage_json_uses_milliseconds() {
        let usage: CategoryUsage =
            serde_json::from_str(r#"{"category":"social_media","time_spent_ms":7200000}"#).unwrap();
        assert_eq!(usage.category, AppCategory::SocialMedia);
        assert_eq!(usage.time_spent, Duration::hours(2));
        let json = serde_json::to_value(&usage).unwrap();
        assert_eq!(json["time_spent_ms"], 7_200_000);
    }

    #[test]
    fn test_negative_duration_clamps() {
        assert_eq!(duration_hours(Duration::minutes(-30)), 0.0);
    }
}
