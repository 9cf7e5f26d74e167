use serde::Deserialize;

/// An education stream from `GET /streams`. Only the fields the list shows
/// are decoded; exams per stream come from `GET /exams/{streamName}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationStream {
    #[serde(default)]
    pub stream_name: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

impl EducationStream {
    pub fn line(&self) -> String {
        format!(
            "{} ({})",
            self.stream_name.as_deref().unwrap_or_default(),
            self.level.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_ignores_undisplayed_fields() {
        let stream: EducationStream = serde_json::from_str(
            r#"{"streamName":"Science (PCM)","level":"12th","commonExams":["JEE Main"]}"#,
        )
        .unwrap();
        assert_eq!(stream.line(), "Science (PCM) (12th)");
    }
}
