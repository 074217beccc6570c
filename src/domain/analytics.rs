// Aggregate analytics domain models
use serde::Deserialize;

use super::filters::TimeGrouping;

/// One time bucket of the defect trend. Rates are service-computed and kept
/// as received.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefectTrendPoint {
    pub timestamp: String,
    pub total_inspections: u64,
    pub rejected_inspections: u64,
    pub rejection_rate: f64,
    pub defect_count: u64,
}

/// Chronological trend points plus an echo of the requested grouping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefectTrendsResponse {
    pub trends: Vec<DefectTrendPoint>,
    pub grouping: TimeGrouping,
}

/// Per-machine aggregate quality and process metrics over a date range.
/// The nullable averages mean "no data in range", not zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MachinePerformance {
    pub machine_id: String,
    pub total_inspections: u64,
    pub rejected_count: u64,
    pub rejection_rate: f64,
    pub avg_cycle_time: Option<f64>,
    pub avg_injection_pressure: Option<f64>,
    pub avg_barrel_temp: Option<f64>,
    pub alarm_rate: f64,
}

/// Machines keyed uniquely by machine_id, in service order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MachinePerformanceResponse {
    pub machines: Vec<MachinePerformance>,
}

/// Defect count for one defect type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefectCount {
    pub defect_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefectTypeStats {
    pub defect_type: String,
    pub count: u64,
    pub rejection_rate: f64,
}

/// Breakdown of rejected inspections by defect type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DefectDistributionResponse {
    pub distribution: Vec<DefectCount>,
    pub defect_stats: Vec<DefectTypeStats>,
    pub total_defects: u64,
}
