use serde::{Deserialize, Serialize};

/// A conversation between platform users.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    #[serde(default)]
    pub participant_ids: Vec<String>,
}

impl Conversation {
    /// Counterpart participants, excluding the given user.
    pub fn others(&self, user_id: &str) -> Vec<&str> {
        self.participant_ids
            .iter()
            .map(String::as_str)
            .filter(|id| *id != user_id)
            .collect()
    }

    pub fn title(&self, user_id: &str) -> String {
        let others = self.others(user_id);
        if others.is_empty() {
            "(just you)".to_string()
        } else {
            others.join(", ")
        }
    }
}

/// A single message in a conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub conversation_id: String,
    pub sender_id: String,
    pub content: String,
    #[serde(default)]
    pub sent_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_title_excludes_self() {
        let conv = Conversation {
            id: "c1".to_string(),
            participant_ids: vec!["me".to_string(), "org-7".to_string()],
        };
        assert_eq!(conv.title("me"), "org-7");
        assert_eq!(conv.others("me"), vec!["org-7"]);
    }

    #[test]
    fn test_parse_message() {
        let json = r#"{"id":"m1","conversation_id":"c1","sender_id":"me","content":"hello"}"#;
        let msg: Message = serde_json::from_str(json).expect("parse message");
        assert_eq!(msg.content, "hello");
        assert_eq!(msg.sent_at, None);
    }
}
