use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};

/// Presence of a member as reported by Trello.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Disconnected,
    Idle,
    Active,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MemberStatus::Disconnected => "disconnected",
            MemberStatus::Idle => "idle",
            MemberStatus::Active => "active",
            MemberStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberJson {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub initials: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "avatarHash")]
    pub avatar_hash: Option<String>,
    pub url: Option<String>,
    pub confirmed: Option<bool>,
    pub status: Option<MemberStatus>,
}

impl Identified for MemberJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for MemberJson {
    const KIND: &'static str = "member";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::MemberRead { id: &key.id }.endpoint()
    }

    fn write_endpoint(&self, key: &SyncKey) -> Option<Endpoint> {
        Some(EntityRequest::MemberWrite { id: &key.id }.endpoint())
    }

    fn canonical_id(&self) -> Option<&str> {
        Some(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_member() {
        let json = r#"{
            "id": "m1",
            "fullName": "Ada Lovelace",
            "username": "ada",
            "initials": "AL",
            "avatarHash": null,
            "confirmed": true,
            "status": "idle"
        }"#;
        let member: MemberJson = serde_json::from_str(json).unwrap();
        assert_eq!(member.full_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(member.status, Some(MemberStatus::Idle));
        assert_eq!(member.status.map(|s| s.to_string()), Some("idle".to_string()));
    }
}
