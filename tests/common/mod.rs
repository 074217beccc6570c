// Shared test support: a scripted gateway mock and sample payloads
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use inspection_analytics::application::inspection_api::{
    ApiError, DateRangeParams, DefectDistributionParams, DefectTrendsParams, InspectionApi,
    ListInspectionsParams,
};
use inspection_analytics::domain::analytics::{
    DefectCount, DefectDistributionResponse, DefectTrendPoint, DefectTrendsResponse,
    DefectTypeStats, MachinePerformance, MachinePerformanceResponse,
};
use inspection_analytics::domain::filters::TimeGrouping;
use inspection_analytics::domain::inspection::{
    MachineInspectionCount, ProductInspection, ProductInspectionListResponse,
};
use tokio::sync::Notify;

/// Gateway mock fed from per-operation result scripts. Each call records the
/// parameters it received and pops the next scripted result; an optional gate
/// parks the trends call until the test releases it, which is how the
/// completion-order scenarios are driven.
#[derive(Default)]
pub struct ScriptedApi {
    trends_results: Mutex<VecDeque<Result<DefectTrendsResponse, ApiError>>>,
    performance_results: Mutex<VecDeque<Result<MachinePerformanceResponse, ApiError>>>,
    distribution_results: Mutex<VecDeque<Result<DefectDistributionResponse, ApiError>>>,
    pub trends_params: Mutex<Vec<DefectTrendsParams>>,
    pub performance_params: Mutex<Vec<DateRangeParams>>,
    pub distribution_params: Mutex<Vec<DefectDistributionParams>>,
    trends_gate: Option<Arc<Notify>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Park every trends call on the given gate until it is notified.
    pub fn gate_trends(mut self, gate: Arc<Notify>) -> Self {
        self.trends_gate = Some(gate);
        self
    }

    pub fn push_trends(self, result: Result<DefectTrendsResponse, ApiError>) -> Self {
        self.trends_results.lock().unwrap().push_back(result);
        self
    }

    pub fn push_performance(self, result: Result<MachinePerformanceResponse, ApiError>) -> Self {
        self.performance_results.lock().unwrap().push_back(result);
        self
    }

    pub fn push_distribution(self, result: Result<DefectDistributionResponse, ApiError>) -> Self {
        self.distribution_results.lock().unwrap().push_back(result);
        self
    }
}

#[async_trait]
impl InspectionApi for ScriptedApi {
    async fn list_inspections(
        &self,
        _params: ListInspectionsParams,
    ) -> Result<ProductInspectionListResponse, ApiError> {
        unimplemented!("not exercised by the coordinator tests")
    }

    async fn get_inspection(&self, _inspection_id: u64) -> Result<ProductInspection, ApiError> {
        unimplemented!("not exercised by the coordinator tests")
    }

    async fn machine_inspection_count(
        &self,
        _machine_id: &str,
    ) -> Result<MachineInspectionCount, ApiError> {
        unimplemented!("not exercised by the coordinator tests")
    }

    async fn defect_trends(
        &self,
        params: DefectTrendsParams,
    ) -> Result<DefectTrendsResponse, ApiError> {
        self.trends_params.lock().unwrap().push(params);
        if let Some(gate) = &self.trends_gate {
            gate.notified().await;
        }
        self.trends_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted defect_trends call")
    }

    async fn machine_performance(
        &self,
        params: DateRangeParams,
    ) -> Result<MachinePerformanceResponse, ApiError> {
        self.performance_params.lock().unwrap().push(params);
        self.performance_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted machine_performance call")
    }

    async fn defect_distribution(
        &self,
        params: DefectDistributionParams,
    ) -> Result<DefectDistributionResponse, ApiError> {
        self.distribution_params.lock().unwrap().push(params);
        self.distribution_results
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted defect_distribution call")
    }
}

pub fn remote_error() -> ApiError {
    ApiError::Remote {
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        body: "internal error".to_string(),
    }
}

pub fn sample_trends() -> DefectTrendsResponse {
    DefectTrendsResponse {
        trends: vec![
            DefectTrendPoint {
                timestamp: "2024-01-01T00:00:00".to_string(),
                total_inspections: 120,
                rejected_inspections: 6,
                rejection_rate: 0.05,
                defect_count: 9,
            },
            DefectTrendPoint {
                timestamp: "2024-01-08T00:00:00".to_string(),
                total_inspections: 98,
                rejected_inspections: 2,
                rejection_rate: 0.020_408,
                defect_count: 3,
            },
        ],
        grouping: TimeGrouping::Week,
    }
}

pub fn sample_performance() -> MachinePerformanceResponse {
    MachinePerformanceResponse {
        machines: vec![
            MachinePerformance {
                machine_id: "IM-01".to_string(),
                total_inspections: 512,
                rejected_count: 14,
                rejection_rate: 0.027_3,
                avg_cycle_time: Some(31.2),
                avg_injection_pressure: Some(1180.5),
                avg_barrel_temp: Some(224.1),
                alarm_rate: 0.004,
            },
            MachinePerformance {
                machine_id: "IM-02".to_string(),
                total_inspections: 301,
                rejected_count: 22,
                rejection_rate: 0.073_1,
                avg_cycle_time: None,
                avg_injection_pressure: None,
                avg_barrel_temp: None,
                alarm_rate: 0.011,
            },
        ],
    }
}

pub fn sample_distribution() -> DefectDistributionResponse {
    DefectDistributionResponse {
        distribution: vec![
            DefectCount {
                defect_type: "flash".to_string(),
                count: 17,
            },
            DefectCount {
                defect_type: "short_shot".to_string(),
                count: 8,
            },
        ],
        defect_stats: vec![
            DefectTypeStats {
                defect_type: "flash".to_string(),
                count: 17,
                rejection_rate: 0.68,
            },
            DefectTypeStats {
                defect_type: "short_shot".to_string(),
                count: 8,
                rejection_rate: 0.32,
            },
        ],
        total_defects: 25,
    }
}
