// Inspection record domain models
use serde::Deserialize;

/// One recorded quality-check event for a manufactured unit.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductInspection {
    pub id: u64,
    pub timestamp: String,
    pub machine_id: String,
    pub reject: bool,
    pub cycle_time: f64,
}

/// Offset-paginated page of inspection records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductInspectionListResponse {
    pub inspections: Vec<ProductInspection>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Inspection count for a single machine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MachineInspectionCount {
    pub machine_id: String,
    pub inspection_count: u64,
}
