use serde::{Deserialize, Serialize};

use crate::utils::format_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityStatus {
    Open,
    Closed,
}

impl OpportunityStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OpportunityStatus::Open => "Open",
            OpportunityStatus::Closed => "Closed",
        }
    }
}

/// A volunteering opportunity as returned by the search and detail
/// endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: String,
    #[serde(default)]
    pub org_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub min_hours: i64,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default = "default_remote")]
    pub is_remote: bool,
    pub status: OpportunityStatus,
}

fn default_remote() -> bool {
    true
}

impl Opportunity {
    pub fn skills_display(&self) -> String {
        if self.skills_required.is_empty() {
            "Any".to_string()
        } else {
            self.skills_required.join(", ")
        }
    }

    pub fn dates_display(&self) -> String {
        match (&self.start_date, &self.end_date) {
            (Some(start), Some(end)) => format!("{} - {}", format_date(start), format_date(end)),
            (Some(start), None) => format!("from {}", format_date(start)),
            _ => "Dates TBD".to_string(),
        }
    }

    pub fn location_display(&self) -> &'static str {
        if self.is_remote {
            "Remote"
        } else {
            "On site"
        }
    }
}

/// Row shape of the organization dashboard listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgOpportunityRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub applicants: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_result() {
        let json = r#"[{
            "id": "3f1c8a52-7e41-4c90-9f58-6c0d1a2b3c4d",
            "org_id": "b1b2c3d4-0000-1111-2222-333344445555",
            "title": "Weekend food bank sorter",
            "description": "Sort donations at the central depot.",
            "skills_required": ["lifting", "teamwork"],
            "min_hours": 4,
            "start_date": "2026-09-01",
            "end_date": "2026-12-01",
            "is_remote": false,
            "status": "OPEN"
        }]"#;

        let opps: Vec<Opportunity> = serde_json::from_str(json).expect("parse search result");
        assert_eq!(opps.len(), 1);
        let opp = &opps[0];
        assert_eq!(opp.status, OpportunityStatus::Open);
        assert_eq!(opp.skills_display(), "lifting, teamwork");
        assert_eq!(opp.location_display(), "On site");
    }

    #[test]
    fn test_parse_tolerates_missing_optional_fields() {
        let json = r#"{"id":"x","title":"Remote tutoring","status":"OPEN"}"#;
        let opp: Opportunity = serde_json::from_str(json).expect("parse sparse opportunity");
        assert!(opp.is_remote);
        assert_eq!(opp.skills_display(), "Any");
        assert_eq!(opp.dates_display(), "Dates TBD");
    }
}
