use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};

use super::Position;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListJson {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub closed: Option<bool>,
    pub pos: Option<Position>,
    #[serde(rename = "idBoard")]
    pub id_board: Option<String>,
    pub subscribed: Option<bool>,
}

impl Identified for ListJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for ListJson {
    const KIND: &'static str = "list";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::ListRead { id: &key.id }.endpoint()
    }

    fn write_endpoint(&self, key: &SyncKey) -> Option<Endpoint> {
        Some(EntityRequest::ListWrite { id: &key.id }.endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let json = r#"{"id": "l1", "name": "Doing", "closed": false, "pos": "bottom", "idBoard": "b1"}"#;
        let list: ListJson = serde_json::from_str(json).unwrap();
        assert_eq!(list.name.as_deref(), Some("Doing"));
        assert_eq!(list.pos, Some(Position::Bottom));
        assert!(list.subscribed.is_none());
    }
}
