//! Completeness Module
//!
//! Scores how filled-out a single profile is. The result is cached on the
//! profile for display; ranking uses the coarser `completeness_flags`.

use crate::models::Profile;
use crate::utils::{filled_count, is_filled};

const BIO_POINTS: u32 = 10;
const PER_INTEREST_POINTS: u32 = 5;
const LOCATION_POINTS: u32 = 10;
const BUILDING_BLOCK_POINTS: u32 = 10;
const PER_STUDY_HABIT_POINTS: u32 = 5;
const PERSONALITY_POINTS: u32 = 10;
const PER_LIFE_GOAL_POINTS: u32 = 5;
const PROFILE_PICTURE_POINTS: u32 = 15;

pub const MAX_COMPLETENESS: u8 = 100;

/// Profile completeness in [0, 100].
pub fn completeness(profile: &Profile) -> u8 {
    let mut score = 0u32;

    if is_filled(&profile.bio) {
        score += BIO_POINTS;
    }
    score += filled_count(&profile.interests) as u32 * PER_INTEREST_POINTS;
    if is_filled(&profile.location) {
        score += LOCATION_POINTS;
    }
    if is_filled(&profile.building_block) {
        score += BUILDING_BLOCK_POINTS;
    }
    score += filled_count(&profile.study_habits) as u32 * PER_STUDY_HABIT_POINTS;
    if is_filled(&profile.personality_type) {
        score += PERSONALITY_POINTS;
    }
    score += filled_count(&profile.life_goals) as u32 * PER_LIFE_GOAL_POINTS;
    if profile.has_profile_picture() {
        score += PROFILE_PICTURE_POINTS;
    }

    score.min(MAX_COMPLETENESS as u32) as u8
}

/// How many of {interests, study habits, life goals, bio} are filled, 0-4.
pub fn completeness_flags(profile: &Profile) -> u8 {
    [
        filled_count(&profile.interests) > 0,
        filled_count(&profile.study_habits) > 0,
        filled_count(&profile.life_goals) > 0,
        is_filled(&profile.bio),
    ]
    .into_iter()
    .filter(|filled| *filled)
    .count() as u8
}
