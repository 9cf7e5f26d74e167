use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ports::{ProfileField, ProfileFormPort};

/// A student profile as submitted to `POST /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    /// `None` when the age field does not start with an integer; sent as `null`.
    pub age: Option<i64>,
    pub current_class: String,
    pub current_stream: String,
    pub subjects: Vec<String>,
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub career_aspirations: Vec<String>,
    pub academic_performance: String,
    pub location: String,
    pub family_background: String,
    pub economic_status: String,
    pub exam_scores: BTreeMap<String, f64>,
}

impl Profile {
    /// Builds a profile from the current form values. No validation is applied.
    pub fn from_form(form: &dyn ProfileFormPort) -> Self {
        Profile {
            name: form.value(ProfileField::Name),
            age: parse_age(&form.value(ProfileField::Age)),
            current_class: form.value(ProfileField::CurrentClass),
            current_stream: form.value(ProfileField::CurrentStream),
            subjects: split_list(&form.value(ProfileField::Subjects)),
            interests: split_list(&form.value(ProfileField::Interests)),
            skills: split_list(&form.value(ProfileField::Skills)),
            career_aspirations: split_list(&form.value(ProfileField::CareerAspirations)),
            academic_performance: form.value(ProfileField::AcademicPerformance),
            location: form.value(ProfileField::Location),
            family_background: form.value(ProfileField::FamilyBackground),
            economic_status: form.value(ProfileField::EconomicStatus),
            exam_scores: BTreeMap::new(),
        }
    }
}

/// Parses the leading integer of `raw`, the way a browser's `parseInt` does:
/// leading whitespace is skipped, one optional sign is accepted, and anything
/// after the first run of digits is ignored.
///
/// Returns `None` when no digit follows, or when the value overflows `i64`.
pub fn parse_age(raw: &str) -> Option<i64> {
    let rest = raw.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits: &str = {
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Splits a comma-separated field. Fragments are kept as-is: no trimming,
/// empty fragments included, and an empty field yields `[""]`.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Server-assigned profile identifier. Rendered exactly as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Number(n) => write!(f, "{n}"),
            ProfileId::Text(s) => f.write_str(s),
        }
    }
}

/// One row of `GET /profiles`. Fields beyond these are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: ProfileId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub current_stream: Option<String>,
    #[serde(default)]
    pub current_class: Option<String>,
}

impl ProfileSummary {
    /// `"{id}: {name} ({currentStream}, {currentClass})"`; missing fields render empty.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} ({}, {})",
            self.id,
            self.name.as_deref().unwrap_or_default(),
            self.current_stream.as_deref().unwrap_or_default(),
            self.current_class.as_deref().unwrap_or_default(),
        )
    }
}

/// A stored profile from `GET /profile/{id}`. Every field is optional since
/// the backend may return nulls for unset values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: ProfileId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    #[serde(default)]
    pub current_class: Option<String>,
    #[serde(default)]
    pub current_stream: Option<String>,
    #[serde(default)]
    pub subjects: Option<Vec<String>>,
    #[serde(default)]
    pub interests: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub career_aspirations: Option<Vec<String>>,
    #[serde(default)]
    pub academic_performance: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub family_background: Option<String>,
    #[serde(default)]
    pub economic_status: Option<String>,
    #[serde(default)]
    pub exam_scores: Option<BTreeMap<String, f64>>,
}

impl ProfileRecord {
    /// Summary line followed by one `"Label: value"` line per field.
    pub fn detail_lines(&self) -> Vec<String> {
        let text = |v: &Option<String>| v.clone().unwrap_or_default();
        let list = |v: &Option<Vec<String>>| v.as_deref().unwrap_or_default().join(", ");
        let scores = self
            .exam_scores
            .iter()
            .flatten()
            .map(|(exam, score)| format!("{exam}={score}"))
            .collect::<Vec<_>>()
            .join(", ");

        vec![
            format!(
                "{}: {} ({}, {})",
                self.id,
                text(&self.name),
                text(&self.current_stream),
                text(&self.current_class)
            ),
            format!(
                "Age: {}",
                self.age.map(|a| a.to_string()).unwrap_or_default()
            ),
            format!("Subjects: {}", list(&self.subjects)),
            format!("Interests: {}", list(&self.interests)),
            format!("Skills: {}", list(&self.skills)),
            format!("Career aspirations: {}", list(&self.career_aspirations)),
            format!("Academic performance: {}", text(&self.academic_performance)),
            format!("Location: {}", text(&self.location)),
            format!("Family background: {}", text(&self.family_background)),
            format!("Economic status: {}", text(&self.economic_status)),
            format!("Exam scores: {scores}"),
        ]
    }
}
