use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};

/// Something that happened on a board or card. Actions are read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionJson {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(rename = "idMemberCreator")]
    pub id_member_creator: Option<String>,
    /// Payload whose shape depends on `action_type`.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Identified for ActionJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for ActionJson {
    const KIND: &'static str = "action";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::ActionRead { id: &key.id }.endpoint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_action() {
        let json = r#"{
            "id": "a1",
            "type": "updateCard",
            "date": "2026-01-05T12:00:00.000Z",
            "idMemberCreator": "m1",
            "data": {"card": {"id": "c1", "name": "Ship it"}, "old": {"idList": "l1"}}
        }"#;
        let action: ActionJson = serde_json::from_str(json).unwrap();
        assert_eq!(action.action_type.as_deref(), Some("updateCard"));
        assert_eq!(action.data["card"]["name"], "Ship it");
        assert!(action.write_endpoint(&SyncKey::new("a1")).is_none());
    }
}
