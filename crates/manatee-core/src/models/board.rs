use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};
use crate::validation::Enumerated;

/// Who can see a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardPermissionLevel {
    Private,
    Org,
    Public,
    #[serde(other)]
    Unknown,
}

/// Who may vote on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardVotingPermission {
    Disabled,
    Members,
    Observers,
    Org,
    Public,
    #[serde(other)]
    Unknown,
}

/// Who may comment on cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardCommentPermission {
    Disabled,
    Members,
    Observers,
    Org,
    Public,
    #[serde(other)]
    Unknown,
}

/// Who may invite others to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardInvitationPermission {
    Admins,
    Members,
    #[serde(other)]
    Unknown,
}

/// Display style of the Card Aging power-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardAgingStyle {
    Regular,
    Pirate,
    #[serde(other)]
    Unknown,
}

macro_rules! known_unless_unknown {
    ($($ty:ident),*) => {
        $(impl Enumerated for $ty {
            fn is_known(&self) -> bool {
                !matches!(self, $ty::Unknown)
            }
        })*
    };
}

known_unless_unknown!(
    BoardPermissionLevel,
    BoardVotingPermission,
    BoardCommentPermission,
    BoardInvitationPermission,
    CardAgingStyle
);

impl fmt::Display for BoardPermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardPermissionLevel::Private => write!(f, "Private"),
            BoardPermissionLevel::Org => write!(f, "Organization"),
            BoardPermissionLevel::Public => write!(f, "Public"),
            BoardPermissionLevel::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Board background: a named color or an uploaded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardBackground {
    pub id: String,
    pub color: Option<String>,
    pub image: Option<String>,
}

/// Trello takes the background by id alone.
impl Serialize for BoardBackground {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardPrefsJson {
    #[serde(rename = "permissionLevel")]
    pub permission_level: Option<BoardPermissionLevel>,
    pub voting: Option<BoardVotingPermission>,
    pub comments: Option<BoardCommentPermission>,
    pub invitations: Option<BoardInvitationPermission>,
    #[serde(rename = "selfJoin")]
    pub self_join: Option<bool>,
    #[serde(rename = "cardCovers")]
    pub card_covers: Option<bool>,
    #[serde(rename = "calendarFeedEnabled")]
    pub calendar_feed_enabled: Option<bool>,
    #[serde(rename = "cardAging")]
    pub card_aging: Option<CardAgingStyle>,
    pub background: Option<String>,
    #[serde(rename = "backgroundColor")]
    pub background_color: Option<String>,
    #[serde(rename = "backgroundImage")]
    pub background_image: Option<String>,
}

impl BoardPrefsJson {
    pub fn background(&self) -> Option<BoardBackground> {
        self.background.as_ref().map(|id| BoardBackground {
            id: id.clone(),
            color: self.background_color.clone(),
            image: self.background_image.clone(),
        })
    }

    pub fn set_background(&mut self, background: Option<BoardBackground>) {
        match background {
            Some(bg) => {
                self.background = Some(bg.id);
                self.background_color = bg.color;
                self.background_image = bg.image;
            }
            None => {
                self.background = None;
                self.background_color = None;
                self.background_image = None;
            }
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardJson {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub desc: Option<String>,
    pub closed: Option<bool>,
    pub pinned: Option<bool>,
    pub starred: Option<bool>,
    pub url: Option<String>,
    #[serde(rename = "shortUrl")]
    pub short_url: Option<String>,
    #[serde(rename = "idOrganization")]
    pub id_organization: Option<String>,
    pub prefs: Option<BoardPrefsJson>,
}

impl BoardJson {
    pub(crate) fn prefs_mut(&mut self) -> &mut BoardPrefsJson {
        self.prefs.get_or_insert_with(BoardPrefsJson::default)
    }
}

impl Identified for BoardJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for BoardJson {
    const KIND: &'static str = "board";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::BoardRead { id: &key.id }.endpoint()
    }

    fn write_endpoint(&self, key: &SyncKey) -> Option<Endpoint> {
        Some(EntityRequest::BoardWrite { id: &key.id }.endpoint())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD_JSON: &str = r##"{
        "id": "5e9f1c2b8a1d4c3f2e1a0b9c",
        "name": "Product Roadmap",
        "desc": "Quarterly planning",
        "closed": false,
        "pinned": true,
        "url": "https://trello.com/b/AbCdEf12/product-roadmap",
        "shortUrl": "https://trello.com/b/AbCdEf12",
        "idOrganization": "4f8a2b3c1d0e9f8a7b6c5d4e",
        "prefs": {
            "permissionLevel": "org",
            "voting": "members",
            "comments": "observers",
            "invitations": "admins",
            "selfJoin": true,
            "cardCovers": true,
            "calendarFeedEnabled": false,
            "cardAging": "pirate",
            "background": "blue",
            "backgroundColor": "#0079BF",
            "backgroundImage": null,
            "isTemplate": false
        }
    }"##;

    #[test]
    fn test_parse_board() {
        let board: BoardJson = serde_json::from_str(BOARD_JSON).expect("board should parse");
        assert_eq!(board.name.as_deref(), Some("Product Roadmap"));
        assert_eq!(board.pinned, Some(true));

        let prefs = board.prefs.expect("prefs present");
        assert_eq!(prefs.permission_level, Some(BoardPermissionLevel::Org));
        assert_eq!(prefs.voting, Some(BoardVotingPermission::Members));
        assert_eq!(prefs.comments, Some(BoardCommentPermission::Observers));
        assert_eq!(prefs.invitations, Some(BoardInvitationPermission::Admins));
        assert_eq!(prefs.card_aging, Some(CardAgingStyle::Pirate));
        assert_eq!(
            prefs.background(),
            Some(BoardBackground {
                id: "blue".to_string(),
                color: Some("#0079BF".to_string()),
                image: None,
            })
        );
    }

    #[test]
    fn test_unrecognized_option_is_unknown() {
        let prefs: BoardPrefsJson =
            serde_json::from_str(r#"{"permissionLevel": "enterprise"}"#).unwrap();
        assert_eq!(prefs.permission_level, Some(BoardPermissionLevel::Unknown));
        assert!(!BoardPermissionLevel::Unknown.is_known());
        assert!(BoardPermissionLevel::Public.is_known());
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_string(&BoardVotingPermission::Disabled).unwrap(), "\"disabled\"");
        assert_eq!(serde_json::to_string(&CardAgingStyle::Regular).unwrap(), "\"regular\"");
    }

    #[test]
    fn test_background_serializes_as_id() {
        let background = BoardBackground {
            id: "green".to_string(),
            color: Some("#519839".to_string()),
            image: None,
        };
        assert_eq!(serde_json::to_string(&background).unwrap(), "\"green\"");
    }

    #[test]
    fn test_endpoints_use_key_id() {
        let board = BoardJson::default();
        let key = SyncKey::new("b42");
        assert_eq!(board.read_endpoint(&key).path, "boards/b42");
        assert_eq!(board.write_endpoint(&key).map(|e| e.path), Some("boards/b42".to_string()));
    }
}
