use crate::config::RankingConfig;
use crate::error::Result;
use crate::models::{Profile, RankedMatch};
use crate::services::compatibility::compatibility;
use crate::services::completeness::completeness_flags;
use tracing::{info, warn};

/// Knobs that distinguish the dashboard from the suggestions view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingOptions {
    /// Candidates scoring below this are dropped
    pub min_score: u8,
    /// Keep at most this many results
    pub limit: Option<usize>,
    /// Apply the mutual gender-preference pre-filter
    pub gender_filter: bool,
}

impl RankingOptions {
    /// Open suggestions: thresholded and truncated, no gender filter.
    pub fn suggestions(config: &RankingConfig) -> Self {
        Self {
            min_score: config.suggestion_min_score,
            limit: Some(config.suggestion_limit),
            gender_filter: false,
        }
    }

    /// Dashboard: gender pre-filter with fallback, every candidate ranked.
    pub fn dashboard(config: &RankingConfig) -> Self {
        Self {
            min_score: config.dashboard_min_score,
            limit: None,
            gender_filter: true,
        }
    }
}

/// Candidate Ranker - stateless, reads the pool and never mutates it
#[derive(Debug, Clone, Copy, Default)]
pub struct CandidateRanker;

impl CandidateRanker {
    pub fn new() -> Self {
        Self
    }

    /// Rank `candidates` against `requester`, keeping scores >= `min_score`.
    pub fn rank(
        &self,
        requester: &Profile,
        candidates: &[Profile],
        min_score: u8,
    ) -> Result<Vec<RankedMatch>> {
        let options = RankingOptions {
            min_score,
            ..Default::default()
        };
        self.rank_with(requester, candidates, &options)
    }

    pub fn rank_with(
        &self,
        requester: &Profile,
        candidates: &[Profile],
        options: &RankingOptions,
    ) -> Result<Vec<RankedMatch>> {
        let pool: Vec<&Profile> = candidates
            .iter()
            .filter(|candidate| candidate.id != requester.id)
            .collect();
        let input_count = pool.len();

        let pool = if options.gender_filter {
            self.apply_gender_preference(requester, pool)
        } else {
            pool
        };

        let mut ranked = Vec::with_capacity(pool.len());
        for candidate in pool {
            let score = compatibility(requester, candidate)?;
            if score < options.min_score {
                continue;
            }
            ranked.push(RankedMatch {
                profile: candidate.clone(),
                score,
                completeness_flags: completeness_flags(candidate),
            });
        }

        // Stable: equal keys keep pool order
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.completeness_flags.cmp(&a.completeness_flags))
        });

        if let Some(limit) = options.limit {
            ranked.truncate(limit);
        }

        info!(
            requester_id = %requester.id,
            input_count = input_count,
            output_count = ranked.len(),
            min_score = options.min_score,
            "Candidate ranking completed"
        );

        Ok(ranked)
    }

    /// Mutual gender preference; the whole pool when nobody qualifies.
    fn apply_gender_preference<'a>(
        &self,
        requester: &Profile,
        pool: Vec<&'a Profile>,
    ) -> Vec<&'a Profile> {
        let preferred: Vec<&Profile> = pool
            .iter()
            .copied()
            .filter(|candidate| matches_gender_preference(requester, candidate))
            .collect();

        if preferred.is_empty() && !pool.is_empty() {
            warn!(
                requester_id = %requester.id,
                pool_size = pool.len(),
                "No candidates match gender preference, ranking full pool"
            );
            return pool;
        }

        preferred
    }
}

/// Candidate is the gender the requester is interested in, and vice versa.
pub fn matches_gender_preference(requester: &Profile, candidate: &Profile) -> bool {
    candidate.gender == requester.interested_in && candidate.interested_in == requester.gender
}
