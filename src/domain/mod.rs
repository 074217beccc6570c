// Domain layer - Inspection and analytics value records
pub mod analytics;
pub mod filters;
pub mod inspection;
