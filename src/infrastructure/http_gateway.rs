// HTTP gateway implementation against the inspection service
use crate::application::inspection_api::{
    ApiError, DateRangeParams, DefectDistributionParams, DefectTrendsParams, InspectionApi,
    ListInspectionsParams,
};
use crate::domain::analytics::{
    DefectDistributionResponse, DefectTrendsResponse, MachinePerformanceResponse,
};
use crate::domain::inspection::{
    MachineInspectionCount, ProductInspection, ProductInspectionListResponse,
};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Reqwest-backed gateway. One configured client shared by every operation;
/// translates parameters into GET requests and maps failures into the
/// `ApiError` taxonomy without recovery.
#[derive(Debug, Clone)]
pub struct HttpInspectionApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInspectionApi {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()
            .context("Failed to build inspection service client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T, P>(&self, path: &str, params: Option<&P>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        P: Serialize + Sync,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let mut request = self.client.get(&url);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request
            .send()
            .await
            .map_err(|source| ApiError::Transport { source })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Remote { status, body });
        }

        response.json::<T>().await.map_err(|source| {
            if source.is_decode() {
                ApiError::Decode { source }
            } else {
                ApiError::Transport { source }
            }
        })
    }
}

#[async_trait]
impl InspectionApi for HttpInspectionApi {
    async fn list_inspections(
        &self,
        params: ListInspectionsParams,
    ) -> Result<ProductInspectionListResponse, ApiError> {
        self.get_json("/api/inspections", Some(&params)).await
    }

    async fn get_inspection(&self, inspection_id: u64) -> Result<ProductInspection, ApiError> {
        self.get_json(&format!("/api/inspections/{inspection_id}"), None::<&()>)
            .await
    }

    async fn machine_inspection_count(
        &self,
        machine_id: &str,
    ) -> Result<MachineInspectionCount, ApiError> {
        let path = format!(
            "/api/inspections/machine/{}/count",
            urlencoding::encode(machine_id)
        );
        self.get_json(&path, None::<&()>).await
    }

    async fn defect_trends(
        &self,
        params: DefectTrendsParams,
    ) -> Result<DefectTrendsResponse, ApiError> {
        self.get_json("/api/analytics/defect-trends", Some(&params))
            .await
    }

    async fn machine_performance(
        &self,
        params: DateRangeParams,
    ) -> Result<MachinePerformanceResponse, ApiError> {
        self.get_json("/api/analytics/machine-performance", Some(&params))
            .await
    }

    async fn defect_distribution(
        &self,
        params: DefectDistributionParams,
    ) -> Result<DefectDistributionResponse, ApiError> {
        self.get_json("/api/analytics/defect-distribution", Some(&params))
            .await
    }
}
