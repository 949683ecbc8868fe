use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};

use super::Position;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardJson {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub closed: Option<bool>,
    pub due: Option<DateTime<Utc>>,
    pub pos: Option<Position>,
    #[serde(rename = "idList")]
    pub id_list: Option<String>,
    #[serde(rename = "idBoard")]
    pub id_board: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "shortUrl")]
    pub short_url: Option<String>,
    #[serde(rename = "dateLastActivity")]
    pub date_last_activity: Option<DateTime<Utc>>,
}

impl Identified for CardJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for CardJson {
    const KIND: &'static str = "card";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::CardRead { id: &key.id }.endpoint()
    }

    fn write_endpoint(&self, key: &SyncKey) -> Option<Endpoint> {
        Some(EntityRequest::CardWrite { id: &key.id }.endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card() {
        let json = r#"{
            "id": "c1",
            "name": "Write release notes",
            "desc": "",
            "closed": false,
            "due": "2026-03-01T17:00:00.000Z",
            "pos": 65535,
            "idList": "l1",
            "idBoard": "b1",
            "dateLastActivity": "2026-02-20T09:30:00.000Z",
            "labels": []
        }"#;
        let card: CardJson = serde_json::from_str(json).unwrap();
        assert_eq!(card.name.as_deref(), Some("Write release notes"));
        assert_eq!(card.pos, Some(Position::At(65535.0)));
        assert_eq!(card.id_list.as_deref(), Some("l1"));
        assert_eq!(card.due.map(|d| d.to_rfc3339()), Some("2026-03-01T17:00:00+00:00".to_string()));
    }

    #[test]
    fn test_null_due_date() {
        let card: CardJson = serde_json::from_str(r#"{"id": "c2", "due": null}"#).unwrap();
        assert!(card.due.is_none());
    }
}
