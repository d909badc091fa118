// ============================================
// Completeness Refresh Job
// ============================================
//
// Recomputes the completeness value cached on each profile and writes back
// the ones that changed. Pairwise scores are never cached, only this.
//
// Workflow:
// 1. Load every profile from the store
// 2. Recompute completeness in batches
// 3. Write back changed values; a failed write is logged and counted

use crate::config::JobConfig;
use crate::error::Result;
use crate::services::completeness::completeness;
use crate::services::store::ProfileStore;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Completeness refresh statistics
#[derive(Debug, Clone, Default)]
pub struct RefreshStats {
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub processed: u32,
    pub updated: u32,
    pub unchanged: u32,
    pub failed: u32,
    pub duration_ms: u64,
}

/// Completeness refresh job runner
pub struct CompletenessRefreshJob<S: ProfileStore> {
    store: Arc<S>,
    batch_size: usize,
}

impl<S: ProfileStore> CompletenessRefreshJob<S> {
    pub fn new(store: Arc<S>, config: &JobConfig) -> Self {
        Self {
            store,
            batch_size: config.refresh_batch_size.max(1),
        }
    }

    /// Run a single pass over every profile
    pub async fn run(&self) -> Result<RefreshStats> {
        let start_time = Instant::now();
        let mut stats = RefreshStats {
            started_at: Some(Utc::now()),
            ..Default::default()
        };

        let profiles = self.store.all_profiles().await?;
        info!(
            profile_count = profiles.len(),
            batch_size = self.batch_size,
            "Starting completeness refresh"
        );

        for (batch_idx, batch) in profiles.chunks(self.batch_size).enumerate() {
            for profile in batch {
                stats.processed += 1;

                let fresh = completeness(profile);
                if fresh == profile.completeness {
                    stats.unchanged += 1;
                    continue;
                }

                match self.store.update_completeness(profile.id, fresh).await {
                    Ok(()) => stats.updated += 1,
                    Err(e) => {
                        stats.failed += 1;
                        error!(
                            profile_id = %profile.id,
                            error = %e,
                            "Failed to update completeness"
                        );
                    }
                }
            }

            info!(
                batch = batch_idx + 1,
                profiles = batch.len(),
                "Processed completeness batch"
            );
        }

        stats.completed_at = Some(Utc::now());
        stats.duration_ms = start_time.elapsed().as_millis() as u64;

        info!(
            processed = stats.processed,
            updated = stats.updated,
            unchanged = stats.unchanged,
            failed = stats.failed,
            duration_ms = stats.duration_ms,
            "Completeness refresh completed"
        );

        Ok(stats)
    }
}
