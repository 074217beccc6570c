// Remote query gateway port for the inspection service
use crate::domain::analytics::{
    DefectDistributionResponse, DefectTrendsResponse, MachinePerformanceResponse,
};
use crate::domain::filters::{AnalyticsFilters, TimeGrouping};
use crate::domain::inspection::{
    MachineInspectionCount, ProductInspection, ProductInspectionListResponse,
};
use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Failure modes a gateway operation can surface. The gateway performs no
/// recovery; callers decide what each kind means to them.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response received (network failure or timeout).
    #[error("inspection service unreachable: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },
    /// Response received with a non-success status.
    #[error("inspection service returned {status}: {body}")]
    Remote {
        status: reqwest::StatusCode,
        body: String,
    },
    /// Response body did not match the expected shape.
    #[error("undecodable inspection service response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// True when the service reported that no such record exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Remote { status, .. } if *status == reqwest::StatusCode::NOT_FOUND)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport { source } if source.is_timeout())
    }
}

/// Query parameters for listing inspections. Absent fields are omitted from
/// the query string and the service applies its own defaults.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListInspectionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_defects: Option<bool>,
}

/// Query parameters for the defect trend view. The grouping is always sent;
/// the date bounds and machine selector only when set.
#[derive(Debug, Clone, Serialize)]
pub struct DefectTrendsParams {
    pub grouping: TimeGrouping,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
}

impl DefectTrendsParams {
    pub fn from_filters(filters: &AnalyticsFilters) -> Self {
        Self {
            grouping: filters.grouping,
            start_date: filters.start_date.clone(),
            end_date: filters.end_date.clone(),
            machine_id: filters.machine_id.clone(),
        }
    }
}

/// Date-range query parameters for the machine performance view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DateRangeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl DateRangeParams {
    pub fn from_filters(filters: &AnalyticsFilters) -> Self {
        Self {
            start_date: filters.start_date.clone(),
            end_date: filters.end_date.clone(),
        }
    }
}

/// Query parameters for the defect distribution view.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DefectDistributionParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
}

impl DefectDistributionParams {
    pub fn from_filters(filters: &AnalyticsFilters) -> Self {
        Self {
            start_date: filters.start_date.clone(),
            end_date: filters.end_date.clone(),
            machine_id: filters.machine_id.clone(),
        }
    }
}

/// Typed operations against the remote inspection service. Stateless: no
/// retries, no caching, no business logic.
#[async_trait]
pub trait InspectionApi: Send + Sync {
    /// List a page of inspection records.
    async fn list_inspections(
        &self,
        params: ListInspectionsParams,
    ) -> Result<ProductInspectionListResponse, ApiError>;

    /// Fetch a single inspection record by id.
    async fn get_inspection(&self, inspection_id: u64) -> Result<ProductInspection, ApiError>;

    /// Count the inspections recorded for one machine.
    async fn machine_inspection_count(
        &self,
        machine_id: &str,
    ) -> Result<MachineInspectionCount, ApiError>;

    /// Defect trend buckets over time.
    async fn defect_trends(
        &self,
        params: DefectTrendsParams,
    ) -> Result<DefectTrendsResponse, ApiError>;

    /// Per-machine aggregate metrics.
    async fn machine_performance(
        &self,
        params: DateRangeParams,
    ) -> Result<MachinePerformanceResponse, ApiError>;

    /// Defect counts broken down by defect type.
    async fn defect_distribution(
        &self,
        params: DefectDistributionParams,
    ) -> Result<DefectDistributionResponse, ApiError>;
}
