// Crate root - layer modules for the inspection analytics client
pub mod application;
pub mod domain;
pub mod infrastructure;
