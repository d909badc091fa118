use crate::config::RankingConfig;
use crate::error::{MatchingError, Result};
use crate::models::{MatchSummary, Profile, RankedMatch};
use crate::services::compatibility::{compatibility_breakdown, CompatibilityBreakdown};
use crate::services::ranking::{CandidateRanker, RankingOptions};
use crate::services::store::ProfileStore;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Match Service - read paths of the matching UI
///
/// Fetches the requester and candidate pool from the store, then hands them
/// to the ranker. Scores are recomputed on every call.
pub struct MatchService<S: ProfileStore> {
    store: Arc<S>,
    ranker: CandidateRanker,
    config: RankingConfig,
}

impl<S: ProfileStore> MatchService<S> {
    pub fn new(store: Arc<S>, config: RankingConfig) -> Self {
        Self {
            store,
            ranker: CandidateRanker::new(),
            config,
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Every other user, best match first, gender preference applied.
    pub async fn dashboard(&self, requester_id: Uuid) -> Result<Vec<RankedMatch>> {
        let requester = self.require_profile(requester_id).await?;
        let pool = self.store.profiles_except(requester_id).await?;

        self.ranker
            .rank_with(&requester, &pool, &RankingOptions::dashboard(&self.config))
    }

    /// Top matches the requester has not liked yet.
    pub async fn suggest_matches(&self, requester_id: Uuid) -> Result<Vec<MatchSummary>> {
        let requester = self.require_profile(requester_id).await?;
        let liked = self.store.liked_by(requester_id).await?;

        let pool: Vec<Profile> = self
            .store
            .profiles_except(requester_id)
            .await?
            .into_iter()
            .filter(|candidate| !liked.contains(&candidate.id))
            .collect();

        debug!(
            requester_id = %requester_id,
            already_liked = liked.len(),
            pool_size = pool.len(),
            "Built suggestion pool"
        );

        let ranked = self.ranker.rank_with(
            &requester,
            &pool,
            &RankingOptions::suggestions(&self.config),
        )?;

        info!(
            requester_id = %requester_id,
            suggestions = ranked.len(),
            "Suggestions generated"
        );

        Ok(ranked.iter().map(MatchSummary::from).collect())
    }

    /// Per-category compatibility of a profile page, from the viewer's side.
    pub async fn compatibility_with(
        &self,
        viewer_id: Uuid,
        profile_id: Uuid,
    ) -> Result<CompatibilityBreakdown> {
        let viewer = self.require_profile(viewer_id).await?;
        let profile = self.require_profile(profile_id).await?;
        compatibility_breakdown(&viewer, &profile)
    }

    async fn require_profile(&self, id: Uuid) -> Result<Profile> {
        self.store
            .get_profile(id)
            .await?
            .ok_or(MatchingError::ProfileNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, YearValue};
    use crate::services::store::InMemoryProfileStore;

    fn student(gender: &str, interested_in: &str, interests: &[&str]) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            first_name: "Test".to_string(),
            last_name: gender.to_string(),
            gender: gender.to_string(),
            interested_in: interested_in.to_string(),
            course: Course::from("(B.S)"),
            year: Some(YearValue::Number(1)),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn service(profiles: Vec<Profile>) -> MatchService<InMemoryProfileStore> {
        let store = Arc::new(InMemoryProfileStore::with_profiles(profiles));
        MatchService::new(store, RankingConfig::default())
    }

    #[tokio::test]
    async fn test_unknown_requester() {
        let service = service(vec![]);
        let missing = Uuid::new_v4();

        assert!(matches!(
            service.dashboard(missing).await,
            Err(MatchingError::ProfileNotFound(id)) if id == missing
        ));
        assert!(service.suggest_matches(missing).await.is_err());
    }

    #[tokio::test]
    async fn test_suggestions_skip_liked_profiles() {
        let me = student("male", "female", &["chess", "music"]);
        let liked = student("female", "male", &["chess", "music"]);
        let fresh = student("female", "male", &["chess"]);
        let service = service(vec![me.clone(), liked.clone(), fresh.clone()]);
        service.store().record_like(me.id, liked.id).unwrap();

        let suggestions = service.suggest_matches(me.id).await.unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].id, fresh.id);
        // interests 12 + course 10 + year 8
        assert_eq!(suggestions[0].compatibility, 30);
    }

    #[tokio::test]
    async fn test_dashboard_ranks_preferred_gender() {
        let me = student("female", "male", &["art"]);
        let match_a = student("male", "female", &["art"]);
        let match_b = student("male", "female", &[]);
        let other = student("female", "female", &["art"]);
        let service = service(vec![me.clone(), match_a.clone(), match_b.clone(), other]);

        let ranked = service.dashboard(me.id).await.unwrap();
        let ids: Vec<Uuid> = ranked.iter().map(|r| r.profile.id).collect();
        assert_eq!(ids, vec![match_a.id, match_b.id]);
    }

    #[tokio::test]
    async fn test_compatibility_with() {
        let me = student("male", "female", &["chess"]);
        let them = student("female", "male", &["Chess"]);
        let service = service(vec![me.clone(), them.clone()]);

        let breakdown = service.compatibility_with(me.id, them.id).await.unwrap();
        assert_eq!(breakdown.interests, 12);
        assert_eq!(breakdown.total(), 30);
    }
}
