/// Ranking Module
///
/// Orders a candidate pool by pairwise compatibility with the requester.
///
/// # Workflow
/// 1. Drop the requester from the pool (by id)
/// 2. Dashboard only: keep candidates whose gender preference matches the
///    requester both ways, falling back to the whole pool when none do
/// 3. Score every remaining candidate and drop those under `min_score`
/// 4. Sort by score, then by completeness flags, both descending
/// 5. Suggestions only: keep the top N
pub mod ranker;

pub use ranker::{matches_gender_preference, CandidateRanker, RankingOptions};
