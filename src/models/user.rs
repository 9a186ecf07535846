use serde::{Deserialize, Serialize};

/// Platform roles, matching the backend's role enum verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Volunteer,
    OrgAdmin,
    Superadmin,
}

impl Role {
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Volunteer => "Volunteer",
            Role::OrgAdmin => "Organization admin",
            Role::Superadmin => "Superadmin",
        }
    }

    /// Whether this role manages an organization's side of the platform.
    pub fn is_org_side(&self) -> bool {
        matches!(self, Role::OrgAdmin | Role::Superadmin)
    }

    pub fn next(&self) -> Self {
        match self {
            Role::Volunteer => Role::OrgAdmin,
            Role::OrgAdmin => Role::Superadmin,
            Role::Superadmin => Role::Volunteer,
        }
    }
}

/// Identity projection returned by `GET /auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_me_response() {
        let json = r#"{"id":"9ab6dd0a-4f3c-4b8e-90ab-0a8f0cf7a111","email":"vol@example.org","role":"VOLUNTEER"}"#;
        let user: CurrentUser = serde_json::from_str(json).expect("parse me response");
        assert_eq!(user.email, "vol@example.org");
        assert_eq!(user.role, Role::Volunteer);
        assert!(!user.role.is_org_side());
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::OrgAdmin).unwrap(), "\"ORG_ADMIN\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"SUPERADMIN\"").unwrap(),
            Role::Superadmin
        );
    }
}
