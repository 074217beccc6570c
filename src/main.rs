// Main entry point - Dependency injection and a fetch-all smoke run
use std::sync::Arc;

use inspection_analytics::application::analytics_store::AnalyticsStore;
use inspection_analytics::domain::filters::FilterUpdate;
use inspection_analytics::infrastructure::config::load_service_config;
use inspection_analytics::infrastructure::http_gateway::HttpInspectionApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create gateway (infrastructure layer)
    let api = Arc::new(HttpInspectionApi::new(&config.service.base_url)?);

    // Create the coordinator (application layer)
    let store = AnalyticsStore::new(api);

    // Default reporting window: the last seven days
    let today = chrono::Utc::now().date_naive();
    let window_start = today - chrono::Days::new(7);
    store
        .update_filters(FilterUpdate {
            start_date: Some(Some(window_start.format("%Y-%m-%d").to_string())),
            end_date: Some(Some(today.format("%Y-%m-%d").to_string())),
            ..FilterUpdate::default()
        })
        .await;

    println!("Fetching analytics from {}", config.service.base_url);
    store.fetch_all_analytics().await;

    if let Some(error) = store.error().await {
        println!("Last fetch error: {}", error);
    }

    println!("Known machines: {:?}", store.machine_ids().await);

    if let Some(trends) = store.defect_trends().await {
        println!(
            "Defect trends: {} buckets grouped by {:?}",
            trends.trends.len(),
            trends.grouping
        );
    }

    if let Some(performance) = store.machine_performance().await {
        for machine in &performance.machines {
            println!(
                "  {}: {} inspections, rejection rate {:.3}",
                machine.machine_id, machine.total_inspections, machine.rejection_rate
            );
        }
    }

    if let Some(distribution) = store.defect_distribution().await {
        println!(
            "Defect distribution: {} defects across {} types",
            distribution.total_defects,
            distribution.distribution.len()
        );
    }

    Ok(())
}
