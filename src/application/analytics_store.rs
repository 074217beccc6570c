// Analytics state coordinator - shared filters fanned out to independent queries
use crate::application::inspection_api::{
    ApiError, DateRangeParams, DefectDistributionParams, DefectTrendsParams, InspectionApi,
};
use crate::domain::analytics::{
    DefectDistributionResponse, DefectTrendsResponse, MachinePerformanceResponse,
};
use crate::domain::filters::{AnalyticsFilters, FilterUpdate};
use std::sync::Arc;
use tokio::sync::RwLock;

const DEFECT_TRENDS_ERROR: &str = "Failed to fetch defect trends";
const MACHINE_PERFORMANCE_ERROR: &str = "Failed to fetch machine performance";
const DEFECT_DISTRIBUTION_ERROR: &str = "Failed to fetch defect distribution";

#[derive(Debug, Default)]
struct AnalyticsState {
    defect_trends: Option<DefectTrendsResponse>,
    machine_performance: Option<MachinePerformanceResponse>,
    defect_distribution: Option<DefectDistributionResponse>,
    loading: bool,
    error: Option<String>,
    filters: AnalyticsFilters,
}

/// Session-scoped coordinator for the three analytics views. Owns the shared
/// filter set, holds the latest successful result per query kind, and tracks
/// one loading flag and one error slot shared across all fetches.
///
/// The shared flags mean concurrent fetches race on them: whichever fetch
/// completes last decides the final `loading` and `error` values. That
/// last-completed-wins behavior is deliberate and pinned by tests.
pub struct AnalyticsStore {
    api: Arc<dyn InspectionApi>,
    state: RwLock<AnalyticsState>,
}

impl AnalyticsStore {
    pub fn new(api: Arc<dyn InspectionApi>) -> Self {
        Self {
            api,
            state: RwLock::new(AnalyticsState::default()),
        }
    }

    pub async fn filters(&self) -> AnalyticsFilters {
        self.state.read().await.filters.clone()
    }

    pub async fn loading(&self) -> bool {
        self.state.read().await.loading
    }

    pub async fn error(&self) -> Option<String> {
        self.state.read().await.error.clone()
    }

    pub async fn defect_trends(&self) -> Option<DefectTrendsResponse> {
        self.state.read().await.defect_trends.clone()
    }

    pub async fn machine_performance(&self) -> Option<MachinePerformanceResponse> {
        self.state.read().await.machine_performance.clone()
    }

    pub async fn defect_distribution(&self) -> Option<DefectDistributionResponse> {
        self.state.read().await.defect_distribution.clone()
    }

    /// Machine ids present in the held performance response, in service order.
    /// Recomputed on demand; empty until a performance response is stored.
    pub async fn machine_ids(&self) -> Vec<String> {
        self.state
            .read()
            .await
            .machine_performance
            .as_ref()
            .map(|response| {
                response
                    .machines
                    .iter()
                    .map(|machine| machine.machine_id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Merge a partial filter update. Never triggers a fetch and performs no
    /// validation; a bad combination only surfaces when the service rejects
    /// the resulting query.
    pub async fn update_filters(&self, update: FilterUpdate) {
        self.state.write().await.filters.apply(update);
    }

    pub async fn reset_filters(&self) {
        self.state.write().await.filters = AnalyticsFilters::default();
    }

    pub async fn fetch_defect_trends(&self) {
        let filters = self.begin_fetch().await;
        let result = self.api.defect_trends(DefectTrendsParams::from_filters(&filters)).await;
        self.commit_fetch(result, DEFECT_TRENDS_ERROR, |state, response| {
            state.defect_trends = Some(response);
        })
        .await;
    }

    pub async fn fetch_machine_performance(&self) {
        let filters = self.begin_fetch().await;
        let result = self.api.machine_performance(DateRangeParams::from_filters(&filters)).await;
        self.commit_fetch(result, MACHINE_PERFORMANCE_ERROR, |state, response| {
            state.machine_performance = Some(response);
        })
        .await;
    }

    pub async fn fetch_defect_distribution(&self) {
        let filters = self.begin_fetch().await;
        let result = self
            .api
            .defect_distribution(DefectDistributionParams::from_filters(&filters))
            .await;
        self.commit_fetch(result, DEFECT_DISTRIBUTION_ERROR, |state, response| {
            state.defect_distribution = Some(response);
        })
        .await;
    }

    /// Run all three fetches concurrently and return once every one of them
    /// has completed, whether it succeeded or failed.
    pub async fn fetch_all_analytics(&self) {
        futures::join!(
            self.fetch_defect_trends(),
            self.fetch_machine_performance(),
            self.fetch_defect_distribution(),
        );
    }

    /// Raise the shared status flags and snapshot the filters this fetch will
    /// query with. The lock is released before the gateway call, so filter
    /// mutations and other fetches may interleave while it is in flight.
    async fn begin_fetch(&self) -> AnalyticsFilters {
        let mut state = self.state.write().await;
        state.loading = true;
        state.error = None;
        state.filters.clone()
    }

    /// Commit a completed fetch in one atomic state write. Success replaces
    /// the result slot; failure leaves the slot holding its previous value
    /// and records the fixed per-kind message.
    async fn commit_fetch<T>(
        &self,
        result: Result<T, ApiError>,
        message: &str,
        store: impl FnOnce(&mut AnalyticsState, T),
    ) {
        let mut state = self.state.write().await;
        match result {
            Ok(response) => store(&mut state, response),
            Err(error) => {
                tracing::error!(%error, "{}", message);
                state.error = Some(message.to_string());
            }
        }
        state.loading = false;
    }
}
