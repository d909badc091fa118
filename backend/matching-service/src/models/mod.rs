pub mod attributes;

pub use attributes::{Course, CourseCode, PersonalityType, YearValue};

use crate::error::{MatchingError, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The part of a user record that matching reads.
///
/// Every optional attribute defaults to empty, and empty never scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub interested_in: String,
    #[serde(default)]
    pub course: Course,
    #[serde(default)]
    pub year: Option<YearValue>,
    #[serde(default)]
    pub personality_type: String,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub study_habits: Vec<String>,
    #[serde(default)]
    pub life_goals: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub building_block: String,
    #[serde(default)]
    pub profile_picture: Option<String>,
    /// Cached completeness for display; refreshed by the completeness job.
    #[serde(default)]
    pub completeness: u8,
}

impl Profile {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn has_profile_picture(&self) -> bool {
        self.profile_picture
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty())
    }

    /// Year of study as an integer, `None` when not filled in.
    pub fn year(&self) -> Result<Option<i64>> {
        match &self.year {
            None => Ok(None),
            Some(raw) => raw.parse().map_err(|value| MatchingError::InvalidYear {
                profile_id: self.id,
                value,
            }),
        }
    }
}

/// A candidate that survived ranking, with its score against the requester.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMatch {
    pub profile: Profile,
    pub score: u8,
    /// Number of filled {interests, study habits, life goals, bio}; tiebreak only.
    pub completeness_flags: u8,
}

/// What the suggestions view shows for each match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: Uuid,
    pub name: String,
    pub compatibility: u8,
    pub course: Course,
    pub year: Option<YearValue>,
    pub location: String,
    pub personality: String,
}

impl From<&RankedMatch> for MatchSummary {
    fn from(ranked: &RankedMatch) -> Self {
        let profile = &ranked.profile;
        Self {
            id: profile.id,
            name: profile.display_name(),
            compatibility: ranked.score,
            course: profile.course.clone(),
            year: profile.year.clone(),
            location: profile.location.clone(),
            personality: profile.personality_type.clone(),
        }
    }
}
