//! Dataset records as returned by the portal API.
//!
//! The API is a Laravel service and is not strict about its payloads: fields
//! may be missing or explicitly `null`. Every field here therefore falls back
//! to its empty value instead of failing the whole listing.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes `null` the same way as a missing field.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A category or tag attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
}

impl Label {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// One downloadable file attached to a record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileResource {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub original_name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub file_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub file_size: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub formatted_size: String,
    #[serde(default, deserialize_with = "nullable")]
    pub file_path: String,
}

/// The user who submitted a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
}

/// Review state of a contribution. Unrecognised values are read as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    Approved,
    Rejected,
    #[default]
    #[serde(other)]
    Pending,
}

impl ContributionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionStatus::Pending => "pending",
            ContributionStatus::Approved => "approved",
            ContributionStatus::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContributionStatus::Pending => "Pending",
            ContributionStatus::Approved => "Approved",
            ContributionStatus::Rejected => "Rejected",
        }
    }
}

/// A dataset contribution, the unit the listing engine filters and sorts.
///
/// Records are never mutated by the portal: a status, category or tag change
/// made through the API comes back as a replacement record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecord {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub title: String,
    /// Free-text description.
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    #[serde(default, deserialize_with = "nullable")]
    pub organization: String,
    #[serde(default, deserialize_with = "nullable")]
    pub request_type: String,
    #[serde(default, deserialize_with = "nullable")]
    pub status: ContributionStatus,
    #[serde(default, deserialize_with = "nullable")]
    pub categories: Vec<Label>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<Label>,
    #[serde(default, deserialize_with = "nullable")]
    pub created_at: String,
    #[serde(default, deserialize_with = "nullable")]
    pub updated_at: String,
    /// Legacy single-file attachment, superseded by `files`.
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub files: Vec<FileResource>,
    #[serde(default)]
    pub user: Option<Contributor>,
}

impl DatasetRecord {
    /// Attached files, falling back to a resource synthesized from the legacy
    /// `file_path` when the record predates multi-file uploads.
    pub fn resources(&self) -> Vec<FileResource> {
        if !self.files.is_empty() {
            return self.files.clone();
        }
        match self.file_path.as_deref().filter(|p| !p.is_empty()) {
            Some(path) => vec![FileResource {
                id: self.id,
                original_name: path
                    .rsplit('/')
                    .next()
                    .filter(|name| !name.is_empty())
                    .unwrap_or("file")
                    .to_string(),
                file_type: "application/octet-stream".to_string(),
                file_size: 0,
                formatted_size: "Unknown".to_string(),
                file_path: path.to_string(),
            }],
            None => Vec::new(),
        }
    }

    /// Whether chart and download actions should be offered.
    pub fn has_resources(&self) -> bool {
        !self.files.is_empty() || self.file_path.as_deref().is_some_and(|p| !p.is_empty())
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn tag_names(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.name.as_str())
    }

    pub fn submitted_by(&self) -> &str {
        self.user.as_ref().map(|u| u.name.as_str()).unwrap_or("")
    }
}

/// Parses the timestamp shapes the API emits.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Formats a timestamp as `January 1, 2024`; unparseable input is returned as is.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => dt.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Request types offered by the contribution form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    SubmitDataset,
    RequestDataset,
    ReportIssue,
    Feedback,
}

impl RequestType {
    pub const ALL: [RequestType; 4] = [
        RequestType::SubmitDataset,
        RequestType::RequestDataset,
        RequestType::ReportIssue,
        RequestType::Feedback,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            RequestType::SubmitDataset => "submit_dataset",
            RequestType::RequestDataset => "request_dataset",
            RequestType::ReportIssue => "report_issue",
            RequestType::Feedback => "feedback",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestType::SubmitDataset => "Submit Dataset",
            RequestType::RequestDataset => "Request Dataset",
            RequestType::ReportIssue => "Report Issue",
            RequestType::Feedback => "General Feedback",
        }
    }
}

/// `submit_dataset` -> `Submit Dataset`.
pub fn humanize_request_type(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_missing_fields_fall_back_to_empty() {
        let record: DatasetRecord = serde_json::from_str(
            r#"{"id": 7, "title": null, "categories": null, "status": "archived"}"#,
        )
        .unwrap();
        assert_eq!(record.id, 7);
        assert_eq!(record.title, "");
        assert!(record.categories.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.status, ContributionStatus::Pending);
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        for (wire, status) in [
            ("\"approved\"", ContributionStatus::Approved),
            ("\"rejected\"", ContributionStatus::Rejected),
            ("\"pending\"", ContributionStatus::Pending),
        ] {
            assert_eq!(serde_json::from_str::<ContributionStatus>(wire).unwrap(), status);
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
        }
        assert_eq!(ContributionStatus::default(), ContributionStatus::Pending);
    }

    #[test]
    fn legacy_file_path_becomes_single_resource() {
        let record = DatasetRecord {
            id: 3,
            file_path: Some("uploads/2024/flood.csv".to_string()),
            ..Default::default()
        };
        let resources = record.resources();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].original_name, "flood.csv");
        assert_eq!(resources[0].formatted_size, "Unknown");
        assert!(record.has_resources());
    }

    #[test]
    fn record_without_files_offers_no_actions() {
        let record = DatasetRecord {
            file_path: Some(String::new()),
            ..Default::default()
        };
        assert!(!record.has_resources());
        assert!(record.resources().is_empty());
    }

    #[test]
    fn parses_api_timestamp_shapes() {
        assert!(parse_timestamp("2024-06-01").is_some());
        assert!(parse_timestamp("2024-06-01 10:30:00").is_some());
        assert!(parse_timestamp("2024-06-01T10:30:00.000000Z").is_some());
        assert!(parse_timestamp("yesterday").is_none());
        assert_eq!(format_date("2024-01-01"), "January 1, 2024");
    }

    #[test]
    fn humanizes_request_types() {
        assert_eq!(humanize_request_type("submit_dataset"), "Submit Dataset");
        assert_eq!(humanize_request_type("feedback"), "Feedback");
        assert_eq!(humanize_request_type(""), "");
    }
}
