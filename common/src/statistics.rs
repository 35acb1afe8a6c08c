//! Portal-wide figures for the home page: per-category and per-year counts,
//! and the contributor leaderboard.

use std::collections::{BTreeMap, HashMap};

use chrono::Datelike;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::model::dataset::{DatasetRecord, humanize_request_type, nullable};

/// Categories shown in the breakdown chart.
pub const TOP_CATEGORIES: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    pub total_datasets: usize,
    pub total_categories: usize,
    /// Largest first, ties by name, at most [`TOP_CATEGORIES`].
    pub top_categories: Vec<NamedCount>,
    /// Ascending by year.
    pub per_year: Vec<(i32, usize)>,
    /// Change of the last year over the one before, in percent.
    pub growth: Option<f64>,
}

impl DatasetStatistics {
    pub fn from_records(records: &[DatasetRecord]) -> Self {
        let mut by_category: HashMap<&str, usize> = HashMap::new();
        for name in records.iter().flat_map(|r| r.category_names()) {
            *by_category.entry(name).or_default() += 1;
        }

        let mut top_categories: Vec<NamedCount> = by_category
            .iter()
            .map(|(name, count)| NamedCount {
                name: name.to_string(),
                count: *count,
            })
            .collect();
        top_categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
        top_categories.truncate(TOP_CATEGORIES);

        let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
        for created in records.iter().filter_map(DatasetRecord::created_at) {
            *by_year.entry(created.year()).or_default() += 1;
        }
        let per_year: Vec<(i32, usize)> = by_year.into_iter().collect();

        let growth = match per_year.as_slice() {
            [.., (_, previous), (_, last)] if *previous > 0 => {
                Some((*last as f64 - *previous as f64) / *previous as f64 * 100.0)
            }
            _ => None,
        };

        Self {
            total_datasets: records.len(),
            total_categories: by_category.len(),
            top_categories,
            per_year,
            growth,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderboardUser {
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
}

// SQL aggregates may come back as numeric strings.
fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(as_count(&Value::deserialize(deserializer)?).unwrap_or(0))
}

/// Reads `{"type": count}`. An empty PHP array serializes as `[]`, so
/// anything other than an object is read as no counts.
fn count_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let counts = match Value::deserialize(deserializer)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(kind, value)| Some((kind, as_count(&value)?)))
            .collect(),
        _ => BTreeMap::new(),
    };
    Ok(counts)
}

/// Raw item of `/contributes/leaderboard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LeaderboardItem {
    #[serde(default)]
    pub user: Option<LeaderboardUser>,
    #[serde(default, deserialize_with = "count")]
    pub total: u64,
    #[serde(default, deserialize_with = "count_map")]
    pub request_types: BTreeMap<String, u64>,
    #[serde(default)]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankingEntry {
    pub name: String,
    pub department: String,
    pub contributions: u64,
    /// Most frequent request type, humanized.
    pub recent: String,
}

impl RankingEntry {
    pub fn from_leaderboard(item: &LeaderboardItem, index: usize) -> Self {
        let name = item
            .user
            .as_ref()
            .map(|u| u.name.clone())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| format!("Contributor {}", index + 1));
        let department = item
            .organization
            .clone()
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| "—".to_string());
        // Ties go to the alphabetically first type.
        let recent = item
            .request_types
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(kind, _)| humanize_request_type(kind))
            .unwrap_or_else(|| "Recent activity".to_string());

        Self {
            name,
            department,
            contributions: item.total,
            recent,
        }
    }
}

pub fn ranking(items: &[LeaderboardItem]) -> Vec<RankingEntry> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| RankingEntry::from_leaderboard(item, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::dataset::Label;

    fn record(created: &str, categories: &[&str]) -> DatasetRecord {
        DatasetRecord {
            created_at: created.into(),
            categories: categories.iter().map(|c| Label::new(0, *c)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn category_and_year_breakdown() {
        let records = vec![
            record("2023-03-01", &["Health"]),
            record("2023-04-01", &["Health", "Education"]),
            record("2024-01-01", &["Agriculture"]),
            record("2024-02-01", &["Education"]),
            record("2024-03-01", &[]),
            record("garbage", &[]),
        ];
        let stats = DatasetStatistics::from_records(&records);
        assert_eq!(stats.total_datasets, 6);
        assert_eq!(stats.total_categories, 3);
        assert_eq!(stats.top_categories[0], NamedCount { name: "Education".into(), count: 2 });
        assert_eq!(stats.top_categories[1].name, "Health");
        assert_eq!(stats.per_year, vec![(2023, 2), (2024, 3)]);
        assert_eq!(stats.growth, Some(50.0));
    }

    #[test]
    fn single_year_has_no_growth() {
        let stats = DatasetStatistics::from_records(&[record("2024-01-01", &[])]);
        assert_eq!(stats.growth, None);
        assert!(DatasetStatistics::from_records(&[]).top_categories.is_empty());
    }

    #[test]
    fn leaderboard_fallbacks() {
        let items: Vec<LeaderboardItem> = serde_json::from_str(
            r#"[
                {"user": {"name": "Maria", "email": "m@x.ph"}, "total": 5,
                 "request_types": {"submit_dataset": 4, "feedback": 1}, "organization": "PHO"},
                {"total": 1}
            ]"#,
        )
        .unwrap();
        let entries = ranking(&items);
        assert_eq!(entries[0].recent, "Submit Dataset");
        assert_eq!(entries[0].department, "PHO");
        assert_eq!(entries[1].name, "Contributor 2");
        assert_eq!(entries[1].department, "—");
        assert_eq!(entries[1].recent, "Recent activity");
    }

    #[test]
    fn leaderboard_tolerates_php_shapes() {
        let items: Vec<LeaderboardItem> = serde_json::from_str(
            r#"[
                {"total": "3", "request_types": {"feedback": "2", "report_issue": 1}},
                {"total": null, "request_types": []}
            ]"#,
        )
        .unwrap();
        assert_eq!(items[0].total, 3);
        assert_eq!(items[0].request_types.get("feedback"), Some(&2));
        assert_eq!(ranking(&items)[0].recent, "Feedback");
        assert_eq!(items[1].total, 0);
        assert!(items[1].request_types.is_empty());
    }
}
