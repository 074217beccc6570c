// Analytics filter domain model
use serde::{Deserialize, Serialize};

/// Time-bucket granularity used to aggregate inspections into trend points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeGrouping {
    Hour,
    #[default]
    Day,
    Week,
}

/// Shared filter state that every analytics query reads at call time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnalyticsFilters {
    pub grouping: TimeGrouping,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub machine_id: Option<String>,
}

/// Partial filter update. A `None` field is left unchanged; for the nullable
/// filters an explicit `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub grouping: Option<TimeGrouping>,
    pub start_date: Option<Option<String>>,
    pub end_date: Option<Option<String>>,
    pub machine_id: Option<Option<String>>,
}

impl AnalyticsFilters {
    /// Merge a partial update, touching only the fields it names.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(grouping) = update.grouping {
            self.grouping = grouping;
        }
        if let Some(start_date) = update.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = update.end_date {
            self.end_date = end_date;
        }
        if let Some(machine_id) = update.machine_id {
            self.machine_id = machine_id;
        }
    }
}
