// Dataset inspection tool
//
// Purpose: load and validate a dataset, log per-university counts, and
// optionally run one content search.
// Usage: cargo run --bin inspect_dataset [-- <university_id> <query...>]

use anyhow::Context;
use std::sync::Arc;
use student_guide::campus::UniversityStats;
use student_guide::{GuideConfig, SelectionState, UniversityDirectory};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "student_guide=info,inspect_dataset=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GuideConfig::from_env();
    tracing::info!("Configuration:");
    tracing::info!(
        "  GUIDE_DATASET: {}",
        config
            .dataset_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(bundled)".to_string())
    );
    tracing::info!(
        "  GUIDE_STATE_FILE: {}",
        config
            .state_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(memory)".to_string())
    );

    let data = config
        .load_dataset()
        .context("dataset failed validation; refusing to start")?;
    let directory = Arc::new(UniversityDirectory::new(data));

    for uni in directory.get_all() {
        let stats = UniversityStats::of(uni);
        tracing::info!(
            "{:<8} {:<32} locations={} hostels={} transport={} food={} services={} faculties={}",
            uni.id,
            uni.name,
            stats.total_locations,
            stats.total_hostels,
            stats.total_transport_options,
            stats.total_food_options,
            stats.total_services,
            stats.total_faculties
        );
    }

    let store = config.open_store().context("failed to open selection store")?;
    let mut selection = SelectionState::restore(Arc::clone(&directory), store);
    match selection.selected_id() {
        Some(id) => tracing::info!("Restored selection: {}", id),
        None => tracing::info!("No stored selection"),
    }

    let mut args = std::env::args().skip(1);
    let Some(university_id) = args.next() else {
        return Ok(());
    };
    let query = args.collect::<Vec<_>>().join(" ");

    if selection.select(&university_id).is_none() {
        anyhow::bail!("unknown university '{}'", university_id);
    }

    let Some(results) = selection.update_query(&query) else {
        tracing::info!("Blank query; nothing to search");
        return Ok(());
    };

    tracing::info!(
        "'{}' in {}: {} matches in {:?}",
        query,
        university_id,
        results.total_count(),
        results.matched_categories()
    );
    println!("{}", serde_json::to_string_pretty(results)?);

    Ok(())
}
