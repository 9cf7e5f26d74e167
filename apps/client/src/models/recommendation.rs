use serde::Deserialize;

/// A generated career suggestion. The backend may name the title `careerPath`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    #[serde(default, alias = "careerPath")]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Recommendation {
    pub fn line(&self) -> String {
        format!(
            "{}: {}",
            self.title.as_deref().unwrap_or_default(),
            self.description.as_deref().unwrap_or_default()
        )
    }
}
