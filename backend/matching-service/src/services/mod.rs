pub mod compatibility;
pub mod completeness;
pub mod matching;
pub mod ranking;
pub mod store;

pub use compatibility::{compatibility, compatibility_breakdown, CompatibilityBreakdown};
pub use completeness::{completeness, completeness_flags};
pub use matching::MatchService;
pub use ranking::{CandidateRanker, RankingOptions};
pub use store::{InMemoryProfileStore, ProfileStore};
