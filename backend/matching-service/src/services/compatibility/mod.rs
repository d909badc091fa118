// ============================================
// Pairwise Compatibility Scorer
// ============================================
//
// Scores how well two profiles match, 0-100. Each category is capped on its
// own, then the sum is clamped to 100:
//
//   interests     12 per shared item, cap 35
//   study habits   8 per shared item, cap 25
//   life goals    10 per shared item, cap 20
//   bio           >=3 shared words 15, 1-2 shared words 8
//   location      exact match 15
//   course        exact 10, similar (A's table entry lists B) 7
//   year          diff 0/1/2 -> 8/6/4
//   personality   complementary pair 12, same label 8
//
// Every category except course is order-independent.

pub mod tables;

pub use tables::{is_compatible_personality, is_similar_course, similar_courses};

use crate::error::Result;
use crate::models::{PersonalityType, Profile};
use crate::utils::{common_item_count, common_word_count, is_filled};
use serde::Serialize;
use tracing::debug;

pub const MAX_SCORE: u8 = 100;

const INTEREST_POINTS: u32 = 12;
const INTEREST_CAP: u32 = 35;
const STUDY_HABIT_POINTS: u32 = 8;
const STUDY_HABIT_CAP: u32 = 25;
const LIFE_GOAL_POINTS: u32 = 10;
const LIFE_GOAL_CAP: u32 = 20;

const BIO_STRONG_OVERLAP_WORDS: usize = 3;
const BIO_STRONG_POINTS: u8 = 15;
const BIO_WEAK_POINTS: u8 = 8;

const LOCATION_POINTS: u8 = 15;

const COURSE_EXACT_POINTS: u8 = 10;
const COURSE_SIMILAR_POINTS: u8 = 7;

const PERSONALITY_COMPLEMENT_POINTS: u8 = 12;
const PERSONALITY_SAME_POINTS: u8 = 8;

/// Per-category contributions of a pairwise score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CompatibilityBreakdown {
    pub interests: u8,
    pub study_habits: u8,
    pub life_goals: u8,
    pub bio: u8,
    pub location: u8,
    pub course: u8,
    pub year: u8,
    pub personality: u8,
}

impl CompatibilityBreakdown {
    /// Sum of all categories, clamped to 100.
    pub fn total(&self) -> u8 {
        let sum = self.interests as u32
            + self.study_habits as u32
            + self.life_goals as u32
            + self.bio as u32
            + self.location as u32
            + self.course as u32
            + self.year as u32
            + self.personality as u32;
        sum.min(MAX_SCORE as u32) as u8
    }
}

/// Compatibility of `b` as seen from `a`, 0-100.
///
/// Fails only when either profile has a year that is not an integer.
pub fn compatibility(a: &Profile, b: &Profile) -> Result<u8> {
    Ok(compatibility_breakdown(a, b)?.total())
}

pub fn compatibility_breakdown(a: &Profile, b: &Profile) -> Result<CompatibilityBreakdown> {
    let breakdown = CompatibilityBreakdown {
        interests: shared_items_score(
            &a.interests,
            &b.interests,
            INTEREST_POINTS,
            INTEREST_CAP,
        ),
        study_habits: shared_items_score(
            &a.study_habits,
            &b.study_habits,
            STUDY_HABIT_POINTS,
            STUDY_HABIT_CAP,
        ),
        life_goals: shared_items_score(
            &a.life_goals,
            &b.life_goals,
            LIFE_GOAL_POINTS,
            LIFE_GOAL_CAP,
        ),
        bio: bio_score(&a.bio, &b.bio),
        location: location_score(&a.location, &b.location),
        course: course_score(a, b),
        year: year_score(a.year()?, b.year()?),
        personality: personality_score(&a.personality_type, &b.personality_type),
    };

    debug!(
        profile_a = %a.id,
        profile_b = %b.id,
        interests = breakdown.interests,
        study_habits = breakdown.study_habits,
        life_goals = breakdown.life_goals,
        bio = breakdown.bio,
        location = breakdown.location,
        course = breakdown.course,
        year = breakdown.year,
        personality = breakdown.personality,
        total = breakdown.total(),
        "Compatibility computed"
    );

    Ok(breakdown)
}

fn shared_items_score(a: &[String], b: &[String], per_item: u32, cap: u32) -> u8 {
    let shared = common_item_count(a, b) as u32;
    (shared.saturating_mul(per_item)).min(cap) as u8
}

fn bio_score(a: &str, b: &str) -> u8 {
    match common_word_count(a, b) {
        0 => 0,
        n if n >= BIO_STRONG_OVERLAP_WORDS => BIO_STRONG_POINTS,
        _ => BIO_WEAK_POINTS,
    }
}

/// Case-sensitive; no normalization beyond rejecting blank values.
fn location_score(a: &str, b: &str) -> u8 {
    if is_filled(a) && a == b {
        LOCATION_POINTS
    } else {
        0
    }
}

fn course_score(a: &Profile, b: &Profile) -> u8 {
    if a.course.is_empty() || b.course.is_empty() {
        return 0;
    }
    if a.course == b.course {
        return COURSE_EXACT_POINTS;
    }
    match (a.course.code(), b.course.code()) {
        (Some(from), Some(to)) if is_similar_course(from, to) => COURSE_SIMILAR_POINTS,
        _ => 0,
    }
}

fn year_score(a: Option<i64>, b: Option<i64>) -> u8 {
    let (Some(a), Some(b)) = (a, b) else {
        return 0;
    };
    match a.abs_diff(b) {
        0 => 8,
        1 => 6,
        2 => 4,
        _ => 0,
    }
}

fn personality_score(a: &str, b: &str) -> u8 {
    if !is_filled(a) || !is_filled(b) {
        return 0;
    }
    let complementary = match (PersonalityType::from_label(a), PersonalityType::from_label(b)) {
        (Some(x), Some(y)) => is_compatible_personality(x, y),
        _ => false,
    };
    if complementary {
        PERSONALITY_COMPLEMENT_POINTS
    } else if a == b {
        PERSONALITY_SAME_POINTS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatchingError;
    use crate::models::{Course, YearValue};
    use uuid::Uuid;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn student(course: &str, year: i64) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            course: Course::from(course),
            year: Some(YearValue::Number(year)),
            ..Default::default()
        }
    }

    #[test]
    fn test_interest_overlap_is_capped() {
        let a = strings(&["chess", "music", "hiking", "reading"]);
        let b = strings(&["CHESS", " music", "Hiking ", "reading"]);
        // 4 * 12 = 48, capped at 35
        assert_eq!(shared_items_score(&a, &b, INTEREST_POINTS, INTEREST_CAP), 35);
        assert_eq!(shared_items_score(&a[..1], &b, INTEREST_POINTS, INTEREST_CAP), 12);
        assert_eq!(shared_items_score(&a, &[], INTEREST_POINTS, INTEREST_CAP), 0);
    }

    #[test]
    fn test_habits_and_goals_caps() {
        let habits = strings(&["library", "night owl", "group study", "notes"]);
        assert_eq!(
            shared_items_score(&habits, &habits, STUDY_HABIT_POINTS, STUDY_HABIT_CAP),
            25
        );
        let goals = strings(&["startup", "phd", "travel"]);
        assert_eq!(
            shared_items_score(&goals, &goals, LIFE_GOAL_POINTS, LIFE_GOAL_CAP),
            20
        );
    }

    #[test]
    fn test_bio_score_bands() {
        assert_eq!(bio_score("love coding and music", "coding music and chess"), 15);
        assert_eq!(bio_score("love coding", "Coding all day"), 8);
        assert_eq!(bio_score("love coding", "hate maths"), 0);
        assert_eq!(bio_score("", "hate maths"), 0);
    }

    #[test]
    fn test_location_is_case_sensitive() {
        assert_eq!(location_score("Block-A", "Block-A"), 15);
        assert_eq!(location_score("Block-A", "block-a"), 0);
        assert_eq!(location_score("", ""), 0);
    }

    #[test]
    fn test_course_exact_and_similar() {
        let btech = student("(B.Tech)", 1);
        let mtech = student("(M.Tech)", 1);
        let mba = student("(MBA)", 1);
        let design = student("Design", 1);

        assert_eq!(course_score(&btech, &btech.clone()), 10);
        assert_eq!(course_score(&btech, &mtech), 7);
        assert_eq!(course_score(&mba, &btech), 7);
        assert_eq!(course_score(&btech, &mba), 0);
        assert_eq!(course_score(&design, &student("Design", 1)), 10);
        assert_eq!(course_score(&design, &btech), 0);
    }

    #[test]
    fn test_empty_courses_do_not_match() {
        let a = Profile::new(Uuid::new_v4());
        let b = Profile::new(Uuid::new_v4());
        assert_eq!(course_score(&a, &b), 0);
    }

    #[test]
    fn test_blank_text_fields_do_not_score() {
        let blank = |id| Profile {
            id,
            location: "   ".to_string(),
            personality_type: "  ".to_string(),
            course: Course::from(" "),
            bio: " \t ".to_string(),
            ..Default::default()
        };
        let a = blank(Uuid::new_v4());
        let b = blank(Uuid::new_v4());

        let breakdown = compatibility_breakdown(&a, &b).unwrap();
        assert_eq!(breakdown.location, 0);
        assert_eq!(breakdown.personality, 0);
        assert_eq!(breakdown.course, 0);
        assert_eq!(breakdown.total(), 0);
    }

    #[test]
    fn test_year_bands() {
        assert_eq!(year_score(Some(2), Some(2)), 8);
        assert_eq!(year_score(Some(2), Some(3)), 6);
        assert_eq!(year_score(Some(4), Some(2)), 4);
        assert_eq!(year_score(Some(1), Some(5)), 0);
        assert_eq!(year_score(None, Some(5)), 0);
    }

    #[test]
    fn test_personality_scores() {
        assert_eq!(personality_score("Introvert", "Extrovert"), 12);
        assert_eq!(personality_score("Cautious", "Adventurous"), 12);
        assert_eq!(personality_score("Introvert", "Introvert"), 8);
        assert_eq!(personality_score("Dreamer", "Dreamer"), 8);
        assert_eq!(personality_score("Introvert", "Creative"), 0);
        assert_eq!(personality_score("", ""), 0);
    }

    #[test]
    fn test_invalid_year_propagates() {
        let a = student("(B.Tech)", 2);
        let mut b = student("(B.Tech)", 2);
        b.year = Some(YearValue::from("second"));

        let err = compatibility(&a, &b).unwrap_err();
        assert!(matches!(err, MatchingError::InvalidYear { profile_id, .. } if profile_id == b.id));
        assert!(compatibility(&b, &a).is_err());
    }

    #[test]
    fn test_total_is_clamped() {
        let breakdown = CompatibilityBreakdown {
            interests: 35,
            study_habits: 25,
            life_goals: 20,
            bio: 15,
            location: 15,
            course: 10,
            year: 8,
            personality: 12,
        };
        assert_eq!(breakdown.total(), 100);
    }

    #[test]
    fn test_identical_profiles_max_every_category() {
        let profile = Profile {
            id: Uuid::new_v4(),
            interests: strings(&["chess", "music", "hiking"]),
            study_habits: strings(&["library", "notes", "night owl", "flashcards"]),
            life_goals: strings(&["startup", "travel"]),
            bio: "I enjoy long walks and quiet libraries".to_string(),
            location: "Block-C".to_string(),
            course: Course::from("(Ph.D)"),
            year: Some(YearValue::Number(3)),
            personality_type: "Analytical".to_string(),
            ..Default::default()
        };
        let twin = Profile {
            id: Uuid::new_v4(),
            ..profile.clone()
        };

        let breakdown = compatibility_breakdown(&profile, &twin).unwrap();
        assert_eq!(breakdown.interests, 35);
        assert_eq!(breakdown.study_habits, 25);
        assert_eq!(breakdown.life_goals, 20);
        assert_eq!(breakdown.bio, 15);
        assert_eq!(breakdown.location, 15);
        assert_eq!(breakdown.course, 10);
        assert_eq!(breakdown.year, 8);
        assert_eq!(breakdown.personality, 8);
        assert_eq!(breakdown.total(), 100);
    }
}
