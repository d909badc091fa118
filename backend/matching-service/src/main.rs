use anyhow::Context;
use matching_service::{
    jobs::CompletenessRefreshJob, Config, InMemoryProfileStore, MatchService,
};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    // Load config
    let config = Config::from_env().context("Failed to load config")?;

    info!(
        service = %config.service.service_name,
        suggestion_min_score = config.ranking.suggestion_min_score,
        suggestion_limit = config.ranking.suggestion_limit,
        "Starting matching service"
    );

    let store = match &config.service.snapshot_path {
        Some(path) => InMemoryProfileStore::from_snapshot(path)
            .with_context(|| format!("Failed to load profile snapshot from {}", path))?,
        None => {
            warn!("MATCHING_SNAPSHOT_PATH not set - starting with an empty profile store");
            InMemoryProfileStore::new()
        }
    };
    let store = Arc::new(store);

    let refresh_job = CompletenessRefreshJob::new(store.clone(), &config.jobs);
    refresh_job.run().await?;

    let Some(requester_id) = config.service.requester_id else {
        info!(profiles = store.len(), "No requester configured, exiting");
        return Ok(());
    };

    let service = MatchService::new(store, config.ranking.clone());

    let dashboard = service.dashboard(requester_id).await?;
    for (position, ranked) in dashboard.iter().enumerate() {
        info!(
            position = position + 1,
            profile_id = %ranked.profile.id,
            name = %ranked.profile.display_name(),
            score = ranked.score,
            completeness_flags = ranked.completeness_flags,
            "Dashboard match"
        );
    }

    let suggestions = service.suggest_matches(requester_id).await?;
    info!(
        requester_id = %requester_id,
        suggestions = %serde_json::to_string(&suggestions)?,
        "Suggested matches"
    );

    Ok(())
}
