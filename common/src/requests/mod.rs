//! Request and response payloads exchanged with the portal API.

use serde::{Deserialize, Serialize};

use crate::model::category::Category;
use crate::model::dataset::{ContributionStatus, DatasetRecord, nullable};

/// API base used when the host does not provide one.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Runtime configuration the host serves at `/portal-config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    pub api_base_url: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl PortalConfig {
    /// Absolute URL of an API path such as `/contributes`.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Download link for a stored file. Paths are stored relative to the
    /// API's `uploads/` directory, which the download route already roots at.
    pub fn download_url(&self, file_path: &str) -> String {
        let clean = file_path.trim_start_matches("uploads/").trim_start_matches('/');
        self.endpoint(&format!("download/{clean}"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, deserialize_with = "nullable")]
    pub id: u64,
    #[serde(default, deserialize_with = "nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub email: String,
    #[serde(default, deserialize_with = "nullable")]
    pub role: String,
}

/// The API has answered with either `token` or `access_token` over time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn bearer(&self) -> Option<&str> {
        self.token
            .as_deref()
            .or(self.access_token.as_deref())
            .filter(|t| !t.is_empty())
    }
}

/// Body of `POST /contributes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributeRequest {
    pub organization: String,
    pub request_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

pub const CONTRIBUTE_REQUIRED_FIELDS: &str =
    "Organization, request type, and message are required.";

impl ContributeRequest {
    /// Trims every field and checks the required ones. Blank optional fields
    /// are dropped from the payload.
    pub fn validate(self) -> Result<Self, String> {
        let organization = self.organization.trim().to_string();
        let request_type = self.request_type.trim().to_string();
        let message = self.message.trim().to_string();
        if organization.is_empty() || request_type.is_empty() || message.is_empty() {
            return Err(CONTRIBUTE_REQUIRED_FIELDS.to_string());
        }
        let optional = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        Ok(Self {
            organization,
            request_type,
            message,
            title: optional(self.title),
            name: optional(self.name),
            email: optional(self.email),
        })
    }

    /// `(field, value)` pairs for a multipart submission.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("organization", self.organization.as_str()),
            ("request_type", self.request_type.as_str()),
            ("message", self.message.as_str()),
        ];
        for (key, value) in [("title", &self.title), ("name", &self.name), ("email", &self.email)] {
            if let Some(value) = value {
                fields.push((key, value.as_str()));
            }
        }
        fields
    }
}

/// Body of `PUT /contributes/{id}`; only present fields are changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContributionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ContributionStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<u64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCategoryResponse {
    #[serde(default, deserialize_with = "nullable")]
    pub message: String,
    pub category: Category,
}

/// Laravel pagination envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default = "first_page")]
    pub last_page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

impl<T> PaginatedResponse<T> {
    pub fn has_more(&self) -> bool {
        self.current_page < self.last_page
    }
}

/// `GET /contributes` answers either a bare array or a pagination envelope
/// depending on the API version.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RecordList {
    Plain(Vec<DatasetRecord>),
    Paged(PaginatedResponse<DatasetRecord>),
}

impl RecordList {
    pub fn into_records(self) -> Vec<DatasetRecord> {
        match self {
            RecordList::Plain(records) => records,
            RecordList::Paged(page) => page.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slashes() {
        let config = PortalConfig {
            api_base_url: "https://data.tarlac.gov.ph/api/".into(),
        };
        assert_eq!(config.endpoint("/contributes"), "https://data.tarlac.gov.ph/api/contributes");
        assert_eq!(PortalConfig::default().endpoint("tags"), "http://localhost:8000/api/tags");
    }

    #[test]
    fn login_token_from_either_field() {
        let a: LoginResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        let b: LoginResponse = serde_json::from_str(r#"{"access_token":"xyz","user":{"role":"admin"}}"#).unwrap();
        let c: LoginResponse = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
        assert_eq!(a.bearer(), Some("abc"));
        assert_eq!(b.bearer(), Some("xyz"));
        assert_eq!(c.bearer(), None);
    }

    #[test]
    fn contribute_request_requires_core_fields() {
        let missing = ContributeRequest {
            organization: "  ".into(),
            request_type: "feedback".into(),
            message: "hello".into(),
            ..Default::default()
        };
        assert_eq!(missing.validate().unwrap_err(), CONTRIBUTE_REQUIRED_FIELDS);

        let ok = ContributeRequest {
            organization: " DENR ".into(),
            request_type: "submit_dataset".into(),
            message: " Flood map ".into(),
            name: Some("   ".into()),
            email: Some("a@b.ph".into()),
            title: None,
        }
        .validate()
        .unwrap();
        assert_eq!(ok.organization, "DENR");
        assert_eq!(ok.name, None);
        let json = serde_json::to_value(&ok).unwrap();
        assert!(json.get("name").is_none());
        assert_eq!(ok.form_fields().len(), 4);
    }

    #[test]
    fn update_request_omits_absent_fields() {
        let body = UpdateContributionRequest {
            status: Some(ContributionStatus::Rejected),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"status":"rejected"}"#);
    }

    #[test]
    fn pagination_envelope_defaults() {
        let page: PaginatedResponse<DatasetRecord> =
            serde_json::from_str(r#"{"data":[{"id":1}],"current_page":1,"last_page":3}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert!(page.has_more());
    }

    #[test]
    fn download_url_strips_upload_prefix() {
        let config = PortalConfig::default();
        assert_eq!(
            config.download_url("uploads/contributions/flood.csv"),
            "http://localhost:8000/api/download/contributions/flood.csv"
        );
        assert_eq!(
            config.download_url("/contributions/a.pdf"),
            "http://localhost:8000/api/download/contributions/a.pdf"
        );
    }

    #[test]
    fn record_list_accepts_both_shapes() {
        let plain: RecordList = serde_json::from_str(r#"[{"id":1},{"id":2}]"#).unwrap();
        let paged: RecordList =
            serde_json::from_str(r#"{"data":[{"id":3}],"current_page":1,"last_page":1}"#).unwrap();
        assert_eq!(plain.into_records().len(), 2);
        assert_eq!(paged.into_records()[0].id, 3);
    }
}
