use serde::{Deserialize, Serialize};

use crate::utils::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::Accepted => "Accepted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }
}

/// A volunteer's application to an opportunity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    #[serde(default)]
    pub volunteer_id: Option<String>,
    pub opportunity_id: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub match_score: Option<f64>,
    #[serde(default)]
    pub applied_at: Option<String>,
}

impl Application {
    pub fn applied_display(&self) -> String {
        self.applied_at
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_application() {
        let json = r#"{
            "id": "a1",
            "volunteer_id": "u1",
            "opportunity_id": "o1",
            "status": "PENDING",
            "match_score": 0.88,
            "applied_at": "2026-08-01T10:22:33.123456"
        }"#;
        let app: Application = serde_json::from_str(json).expect("parse application");
        assert_eq!(app.status, ApplicationStatus::Pending);
        assert_eq!(app.match_score, Some(0.88));
        assert_eq!(app.applied_display(), "2026-08-01");
    }
}
