//! Typed client for the portal REST API.
//!
//! Every call goes through [`Api::execute`], which maps transport failures,
//! non-2xx answers and undecodable bodies onto [`ApiError`]. The bearer
//! token comes from the `Session` the client was built with.

use gloo_console::{error, log};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use common::error::ApiError;
use common::model::category::Category;
use common::model::dataset::{DatasetRecord, Label};
use common::model::table::FileData;
use common::requests::{
    ContributeRequest, CreateCategoryRequest, CreateCategoryResponse, LoginRequest, LoginResponse,
    PaginatedResponse, PortalConfig, RecordList, UpdateContributionRequest,
};
use common::session::Session;
use common::statistics::LeaderboardItem;

const CONFIG_PATH: &str = "/portal-config.json";

/// Loads the runtime configuration published by the host, falling back to
/// the default API base when it is unreachable (e.g. under `trunk serve`).
pub async fn load_portal_config() -> PortalConfig {
    let response = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response,
        _ => {
            log!("no runtime config, using the default API base");
            return PortalConfig::default();
        }
    };
    match response.json::<PortalConfig>().await {
        Ok(config) => config,
        Err(err) => {
            error!(format!("invalid {CONFIG_PATH}: {err}"));
            PortalConfig::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Api {
    config: PortalConfig,
    bearer: Option<String>,
}

impl Api {
    pub fn new(config: PortalConfig, session: &Session) -> Self {
        Self {
            config,
            bearer: session.bearer_header(),
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.bearer {
            Some(bearer) => builder.header("Authorization", bearer),
            None => builder,
        }
    }

    fn require_auth(&self) -> Result<(), ApiError> {
        if self.bearer.is_some() {
            Ok(())
        } else {
            Err(ApiError::Unauthenticated)
        }
    }

    async fn execute<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
        let url = request.url();
        let response = request.send().await.map_err(|err| {
            error!(format!("request to {url} failed: {err}"));
            ApiError::Network
        })?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if !response.ok() {
            let err = ApiError::from_response(status, &body);
            error!(format!("{url}: {err}"));
            return Err(err);
        }
        serde_json::from_str(&body).map_err(|err| {
            error!(format!("{url}: unexpected body: {err}"));
            ApiError::Decode(err.to_string())
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .authorized(Request::get(&self.url(path)))
            .build()
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::execute(request).await
    }

    async fn send_json<B, T>(&self, builder: RequestBuilder, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .authorized(builder)
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::execute(request).await
    }

    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.send_json(Request::post(&self.url("/login")), payload)
            .await
    }

    /// Every approved contribution, following the pagination envelope to
    /// the last page.
    pub async fn fetch_all_approved(&self) -> Result<Vec<DatasetRecord>, ApiError> {
        let mut records = Vec::new();
        let mut page = 1;
        loop {
            let envelope: PaginatedResponse<DatasetRecord> = self
                .get(&format!("/contributes/approved?page={page}"))
                .await?;
            let done = !envelope.has_more() || envelope.data.is_empty();
            records.extend(envelope.data);
            if done {
                break;
            }
            page += 1;
        }
        log!(format!("loaded {} approved datasets", records.len()));
        Ok(records)
    }

    pub async fn fetch_approved(&self, id: u64) -> Result<DatasetRecord, ApiError> {
        self.get(&format!("/contributes/approved/{id}")).await
    }

    /// Decoded rows of a dataset resource; the first resource when `file_id`
    /// is `None`.
    pub async fn fetch_file_data(&self, id: u64, file_id: Option<u64>) -> Result<FileData, ApiError> {
        let path = match file_id {
            Some(file_id) => format!("/contributes/approved/{id}/data/{file_id}"),
            None => format!("/contributes/approved/{id}/data"),
        };
        self.get(&path).await
    }

    /// All contributions regardless of status (admin only).
    pub async fn fetch_contributions(&self) -> Result<Vec<DatasetRecord>, ApiError> {
        self.require_auth()?;
        let list: RecordList = self.get("/contributes").await?;
        Ok(list.into_records())
    }

    pub async fn update_contribution(
        &self,
        id: u64,
        payload: &UpdateContributionRequest,
    ) -> Result<serde_json::Value, ApiError> {
        self.require_auth()?;
        self.send_json(Request::put(&self.url(&format!("/contributes/{id}"))), payload)
            .await
    }

    /// Multipart submission of a contribution and its files (`files[]`).
    pub async fn submit_contribution(
        &self,
        payload: &ContributeRequest,
        files: &[File],
    ) -> Result<serde_json::Value, ApiError> {
        self.require_auth()?;
        let form = FormData::new().map_err(|_| ApiError::Decode("FormData unavailable".into()))?;
        for (key, value) in payload.form_fields() {
            form.append_with_str(key, value)
                .map_err(|_| ApiError::Decode(format!("could not add {key}")))?;
        }
        for file in files {
            form.append_with_blob_and_filename("files[]", file, &file.name())
                .map_err(|_| ApiError::Decode(format!("could not attach {}", file.name())))?;
        }
        let request = self
            .authorized(Request::post(&self.url("/contributes")))
            .body(form)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Self::execute(request).await
    }

    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    pub async fn create_category(
        &self,
        payload: &CreateCategoryRequest,
    ) -> Result<CreateCategoryResponse, ApiError> {
        self.require_auth()?;
        self.send_json(Request::post(&self.url("/categories")), payload)
            .await
    }

    pub async fn fetch_tags(&self) -> Result<Vec<Label>, ApiError> {
        self.get("/tags").await
    }

    pub async fn fetch_leaderboard(&self) -> Result<Vec<LeaderboardItem>, ApiError> {
        self.get("/contributes/leaderboard").await
    }
}
