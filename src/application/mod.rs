// Application layer - Gateway port and the analytics state coordinator
pub mod analytics_store;
pub mod inspection_api;
