//! Mock analytics data for the dashboard
//!
//! The analytics view is self-contained: it never calls the backend, it
//! renders generated counts in the same shape the backend would return.

use chrono::{Datelike, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyCount {
    /// YYYY-MM-DD
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyCount {
    /// "Week N (YYYY)"
    pub week: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: u32,
}

/// Dashboard payload, mirrors the backend wire shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub daily_counts: Vec<DailyCount>,
    pub weekly_counts: Vec<WeeklyCount>,
    pub top_symptoms: Vec<LabeledCount>,
    pub diagnosis_distribution: Vec<LabeledCount>,
    pub severity_distribution: Vec<LabeledCount>,
}

const TOP_SYMPTOMS: &[(&str, u32)] = &[
    ("Головная боль", 42),
    ("Кашель", 38),
    ("Насморк", 31),
    ("Боль в горле", 27),
    ("Температура", 25),
    ("Слабость", 23),
    ("Боль в животе", 18),
    ("Головокружение", 15),
    ("Боль в спине", 12),
    ("Тошнота", 10),
];

const DIAGNOSIS_DISTRIBUTION: &[(&str, u32)] = &[
    ("Респираторное", 45),
    ("Инфекция", 32),
    ("Воспаление", 28),
    ("Головные боли", 22),
    ("Пищеварительное", 17),
    ("Аллергия", 14),
    ("Травма", 12),
    ("Кожное", 9),
    ("Хроническое", 7),
    ("Другое", 5),
];

const SEVERITY_DISTRIBUTION: &[(&str, u32)] = &[
    ("Не срочно", 65),
    ("Требует внимания", 25),
    ("Срочно", 10),
    ("Не определено", 5),
];

impl AnalyticsData {
    /// Generate the mock dashboard payload
    ///
    /// Daily counts cover the last 30 days (0-5 each), weekly counts the
    /// last 12 ISO weeks (5-25 each); the distributions are static.
    pub fn mock() -> Self {
        let mut rng = rand::thread_rng();
        let today = Utc::now().date_naive();

        let daily_counts = (0..30)
            .rev()
            .map(|i| DailyCount {
                date: (today - Duration::days(i)).format("%Y-%m-%d").to_string(),
                count: rng.gen_range(0..=5),
            })
            .collect();

        let weekly_counts = (0..12)
            .rev()
            .map(|i| {
                let date = today - Duration::weeks(i);
                let iso = date.iso_week();
                WeeklyCount {
                    week: format!("Week {} ({})", iso.week(), iso.year()),
                    count: rng.gen_range(5..=25),
                }
            })
            .collect();

        let labeled = |table: &[(&str, u32)]| {
            table
                .iter()
                .map(|(label, count)| LabeledCount {
                    label: label.to_string(),
                    count: *count,
                })
                .collect()
        };

        AnalyticsData {
            daily_counts,
            weekly_counts,
            top_symptoms: labeled(TOP_SYMPTOMS),
            diagnosis_distribution: labeled(DIAGNOSIS_DISTRIBUTION),
            severity_distribution: labeled(SEVERITY_DISTRIBUTION),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shape() {
        let data = AnalyticsData::mock();
        assert_eq!(data.daily_counts.len(), 30);
        assert_eq!(data.weekly_counts.len(), 12);
        assert_eq!(data.top_symptoms.len(), 10);
        assert_eq!(data.diagnosis_distribution.len(), 10);
        assert_eq!(data.severity_distribution.len(), 4);
    }

    #[test]
    fn test_daily_counts_bounded_and_ordered() {
        let data = AnalyticsData::mock();
        assert!(data.daily_counts.iter().all(|d| d.count <= 5));

        let dates: Vec<&String> = data.daily_counts.iter().map(|d| &d.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "daily counts should be oldest first");
    }

    #[test]
    fn test_weekly_counts_bounded() {
        let data = AnalyticsData::mock();
        assert!(data
            .weekly_counts
            .iter()
            .all(|w| (5..=25).contains(&w.count)));
        assert!(data.weekly_counts.iter().all(|w| w.week.starts_with("Week ")));
    }

    #[test]
    fn test_severity_labels_match_classifier() {
        let data = AnalyticsData::mock();
        let labels: Vec<&str> = data
            .severity_distribution
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert!(labels.contains(&"Срочно"));
        assert!(labels.contains(&"Не срочно"));
    }
}
