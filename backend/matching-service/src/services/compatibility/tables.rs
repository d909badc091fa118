use crate::models::{CourseCode, PersonalityType};

/// Courses treated as close to a given course.
///
/// Directed: only the first course's list is consulted, so `(MBA)` counts
/// `(B.Tech)` as similar while `(B.Tech)` does not list `(MBA)`. Do not
/// symmetrize when editing.
pub const SIMILAR_COURSES: [(CourseCode, &[CourseCode]); 8] = [
    (CourseCode::BTech, &[CourseCode::MTech, CourseCode::BS]),
    (CourseCode::MTech, &[CourseCode::BTech, CourseCode::PhD]),
    (CourseCode::BS, &[CourseCode::BTech, CourseCode::MSc]),
    (CourseCode::MSc, &[CourseCode::BS, CourseCode::PhD]),
    (CourseCode::Mba, &[CourseCode::BTech, CourseCode::MTech]),
    (CourseCode::PhD, &[CourseCode::MTech, CourseCode::MSc]),
    (CourseCode::Humanities, &[CourseCode::BS, CourseCode::MSc]),
    (
        CourseCode::Others,
        &[CourseCode::BTech, CourseCode::MSc, CourseCode::Humanities],
    ),
];

/// Complementary personality pairs, order-independent.
pub const COMPATIBLE_PERSONALITIES: [(PersonalityType, PersonalityType); 3] = [
    (PersonalityType::Introvert, PersonalityType::Extrovert),
    (PersonalityType::Analytical, PersonalityType::Creative),
    (PersonalityType::Adventurous, PersonalityType::Cautious),
];

/// Courses listed as similar to `course`, empty for unlisted codes.
pub fn similar_courses(course: CourseCode) -> &'static [CourseCode] {
    SIMILAR_COURSES
        .iter()
        .find(|(key, _)| *key == course)
        .map(|(_, similar)| *similar)
        .unwrap_or(&[])
}

/// Whether `to` is in `from`'s similar-course list.
pub fn is_similar_course(from: CourseCode, to: CourseCode) -> bool {
    similar_courses(from).contains(&to)
}

pub fn is_compatible_personality(a: PersonalityType, b: PersonalityType) -> bool {
    COMPATIBLE_PERSONALITIES
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}
