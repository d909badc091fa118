pub mod config;
pub mod error;
pub mod jobs;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use error::{MatchingError, Result};
pub use models::{MatchSummary, Profile, RankedMatch};
pub use services::{
    compatibility, compatibility_breakdown, completeness, completeness_flags, CandidateRanker,
    CompatibilityBreakdown, InMemoryProfileStore, MatchService, ProfileStore, RankingOptions,
};
