use serde::{Deserialize, Serialize};
use std::fmt;

/// Course codes offered by the institute, as stored on user records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseCode {
    BTech,
    MTech,
    BS,
    MSc,
    Mba,
    PhD,
    Humanities,
    Others,
}

impl CourseCode {
    pub const ALL: [CourseCode; 8] = [
        CourseCode::BTech,
        CourseCode::MTech,
        CourseCode::BS,
        CourseCode::MSc,
        CourseCode::Mba,
        CourseCode::PhD,
        CourseCode::Humanities,
        CourseCode::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CourseCode::BTech => "(B.Tech)",
            CourseCode::MTech => "(M.Tech)",
            CourseCode::BS => "(B.S)",
            CourseCode::MSc => "(M.Sc)",
            CourseCode::Mba => "(MBA)",
            CourseCode::PhD => "(Ph.D)",
            CourseCode::Humanities => "Humanities",
            CourseCode::Others => "OTHERs",
        }
    }

    /// Exact, case-sensitive lookup of a stored course code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

/// A profile's course: one of the known codes or whatever free text was entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Course {
    Known(CourseCode),
    Other(String),
}

impl Course {
    pub fn as_str(&self) -> &str {
        match self {
            Course::Known(code) => code.as_str(),
            Course::Other(text) => text.as_str(),
        }
    }

    pub fn code(&self) -> Option<CourseCode> {
        match self {
            Course::Known(code) => Some(*code),
            Course::Other(_) => None,
        }
    }

    /// True for an empty or whitespace-only course.
    pub fn is_empty(&self) -> bool {
        self.as_str().trim().is_empty()
    }
}

impl Default for Course {
    fn default() -> Self {
        Course::Other(String::new())
    }
}

impl From<CourseCode> for Course {
    fn from(code: CourseCode) -> Self {
        Course::Known(code)
    }
}

impl From<&str> for Course {
    fn from(value: &str) -> Self {
        match CourseCode::from_code(value) {
            Some(code) => Course::Known(code),
            None => Course::Other(value.to_string()),
        }
    }
}

impl From<String> for Course {
    fn from(value: String) -> Self {
        match CourseCode::from_code(&value) {
            Some(code) => Course::Known(code),
            None => Course::Other(value),
        }
    }
}

impl From<Course> for String {
    fn from(course: Course) -> Self {
        match course {
            Course::Known(code) => code.as_str().to_string(),
            Course::Other(text) => text,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Personality labels that take part in the complementary-pair bonus.
///
/// Profiles may carry any other label; those only ever match themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalityType {
    Introvert,
    Extrovert,
    Analytical,
    Creative,
    Adventurous,
    Cautious,
}

impl PersonalityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalityType::Introvert => "Introvert",
            PersonalityType::Extrovert => "Extrovert",
            PersonalityType::Analytical => "Analytical",
            PersonalityType::Creative => "Creative",
            PersonalityType::Adventurous => "Adventurous",
            PersonalityType::Cautious => "Cautious",
        }
    }

    /// Exact, case-sensitive match against the recognized labels.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Introvert" => Some(PersonalityType::Introvert),
            "Extrovert" => Some(PersonalityType::Extrovert),
            "Analytical" => Some(PersonalityType::Analytical),
            "Creative" => Some(PersonalityType::Creative),
            "Adventurous" => Some(PersonalityType::Adventurous),
            "Cautious" => Some(PersonalityType::Cautious),
            _ => None,
        }
    }
}

/// Year of study as it arrives from the document store.
///
/// Older records hold the year as a string or a float, so every shape is
/// accepted and only converted when the year rule runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Float(f64),
    Text(String),
}

impl YearValue {
    /// `Ok(None)` for a blank value, `Err` with the raw text when it is not an integer.
    pub fn parse(&self) -> Result<Option<i64>, String> {
        match self {
            YearValue::Number(n) => Ok(Some(*n)),
            // whole numbers only; 2.0 is year 2, 2.5 is rejected
            YearValue::Float(f) if f.is_finite() && f.fract() == 0.0 => Ok(Some(*f as i64)),
            YearValue::Float(f) => Err(f.to_string()),
            YearValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed.parse::<i64>().map(Some).map_err(|_| text.clone())
            }
        }
    }
}

impl From<i64> for YearValue {
    fn from(value: i64) -> Self {
        YearValue::Number(value)
    }
}

impl From<&str> for YearValue {
    fn from(value: &str) -> Self {
        YearValue::Text(value.to_string())
    }
}

impl fmt::Display for YearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearValue::Number(n) => write!(f, "{}", n),
            YearValue::Float(x) => write!(f, "{}", x),
            YearValue::Text(text) => f.write_str(text),
        }
    }
}
