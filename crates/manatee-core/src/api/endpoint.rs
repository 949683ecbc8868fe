//! Catalogue of the Trello calls made by this crate.

use reqwest::Method;

/// Method, path (relative to the API base URL) and query parameters of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn with_optional_param(self, key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with_param(key, value),
            None => self,
        }
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Every request the library issues, with the ids it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRequest<'a> {
    ActionRead { id: &'a str },

    BoardRead { id: &'a str },
    BoardWrite { id: &'a str },
    BoardCreate,
    BoardReadActions { id: &'a str },
    BoardReadCards { id: &'a str },
    BoardReadLists { id: &'a str },
    BoardReadMembers { id: &'a str },
    BoardReadPowerUps { id: &'a str },

    CardRead { id: &'a str },
    CardWrite { id: &'a str },
    CardCreate,
    CardReadActions { id: &'a str },
    CardReadStickers { id: &'a str },
    CardReadSticker { card_id: &'a str, sticker_id: &'a str },
    CardWriteSticker { card_id: &'a str, sticker_id: &'a str },
    CardAddSticker { id: &'a str },
    CardRemoveSticker { card_id: &'a str, sticker_id: &'a str },

    ListRead { id: &'a str },
    ListWrite { id: &'a str },
    ListCreate,
    ListReadCards { id: &'a str },

    MemberRead { id: &'a str },
    MemberWrite { id: &'a str },
    MemberReadBoards { id: &'a str },
    MemberReadCustomStickers { id: &'a str },
    MemberReadCustomSticker { member_id: &'a str, sticker_id: &'a str },
    MemberAddCustomSticker { id: &'a str },

    OrganizationRead { id: &'a str },
    OrganizationWrite { id: &'a str },
    OrganizationReadBoards { id: &'a str },

    PowerUpRead { id: &'a str },

    Search,
}

impl EntityRequest<'_> {
    pub fn endpoint(&self) -> Endpoint {
        use EntityRequest::*;

        match *self {
            ActionRead { id } => Endpoint::new(Method::GET, format!("actions/{}", id)),

            BoardRead { id } => Endpoint::new(Method::GET, format!("boards/{}", id)),
            BoardWrite { id } => Endpoint::new(Method::PUT, format!("boards/{}", id)),
            BoardCreate => Endpoint::new(Method::POST, "boards"),
            BoardReadActions { id } => Endpoint::new(Method::GET, format!("boards/{}/actions", id)),
            BoardReadCards { id } => Endpoint::new(Method::GET, format!("boards/{}/cards", id)),
            BoardReadLists { id } => Endpoint::new(Method::GET, format!("boards/{}/lists", id)),
            BoardReadMembers { id } => Endpoint::new(Method::GET, format!("boards/{}/members", id)),
            BoardReadPowerUps { id } => Endpoint::new(Method::GET, format!("boards/{}/plugins", id)),

            CardRead { id } => Endpoint::new(Method::GET, format!("cards/{}", id)),
            CardWrite { id } => Endpoint::new(Method::PUT, format!("cards/{}", id)),
            CardCreate => Endpoint::new(Method::POST, "cards"),
            CardReadActions { id } => Endpoint::new(Method::GET, format!("cards/{}/actions", id)),
            CardReadStickers { id } => Endpoint::new(Method::GET, format!("cards/{}/stickers", id)),
            CardReadSticker { card_id, sticker_id } => {
                Endpoint::new(Method::GET, format!("cards/{}/stickers/{}", card_id, sticker_id))
            }
            CardWriteSticker { card_id, sticker_id } => {
                Endpoint::new(Method::PUT, format!("cards/{}/stickers/{}", card_id, sticker_id))
            }
            CardAddSticker { id } => Endpoint::new(Method::POST, format!("cards/{}/stickers", id)),
            CardRemoveSticker { card_id, sticker_id } => {
                Endpoint::new(Method::DELETE, format!("cards/{}/stickers/{}", card_id, sticker_id))
            }

            ListRead { id } => Endpoint::new(Method::GET, format!("lists/{}", id)),
            ListWrite { id } => Endpoint::new(Method::PUT, format!("lists/{}", id)),
            ListCreate => Endpoint::new(Method::POST, "lists"),
            ListReadCards { id } => Endpoint::new(Method::GET, format!("lists/{}/cards", id)),

            MemberRead { id } => Endpoint::new(Method::GET, format!("members/{}", id)),
            MemberWrite { id } => Endpoint::new(Method::PUT, format!("members/{}", id)),
            MemberReadBoards { id } => Endpoint::new(Method::GET, format!("members/{}/boards", id)),
            MemberReadCustomStickers { id } => {
                Endpoint::new(Method::GET, format!("members/{}/customStickers", id))
            }
            MemberReadCustomSticker { member_id, sticker_id } => Endpoint::new(
                Method::GET,
                format!("members/{}/customStickers/{}", member_id, sticker_id),
            ),
            MemberAddCustomSticker { id } => {
                Endpoint::new(Method::POST, format!("members/{}/customStickers", id))
            }

            OrganizationRead { id } => Endpoint::new(Method::GET, format!("organizations/{}", id)),
            OrganizationWrite { id } => Endpoint::new(Method::PUT, format!("organizations/{}", id)),
            OrganizationReadBoards { id } => {
                Endpoint::new(Method::GET, format!("organizations/{}/boards", id))
            }

            PowerUpRead { id } => Endpoint::new(Method::GET, format!("plugins/{}", id)),

            Search => Endpoint::new(Method::GET, "search"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sticker_endpoints() {
        let add = EntityRequest::CardAddSticker { id: "c1" }.endpoint();
        assert_eq!(add.method, Method::POST);
        assert_eq!(add.path, "cards/c1/stickers");

        let remove = EntityRequest::CardRemoveSticker { card_id: "c1", sticker_id: "s9" }.endpoint();
        assert_eq!(remove.method, Method::DELETE);
        assert_eq!(remove.path, "cards/c1/stickers/s9");

        let upload = EntityRequest::MemberAddCustomSticker { id: "me" }.endpoint();
        assert_eq!(upload.path, "members/me/customStickers");
    }

    #[test]
    fn test_read_and_write_share_path() {
        let read = EntityRequest::BoardRead { id: "b1" }.endpoint();
        let write = EntityRequest::BoardWrite { id: "b1" }.endpoint();
        assert_eq!(read.path, write.path);
        assert_eq!(read.method, Method::GET);
        assert_eq!(write.method, Method::PUT);
    }

    #[test]
    fn test_params() {
        let endpoint = EntityRequest::ListCreate
            .endpoint()
            .with_param("name", "Backlog")
            .with_optional_param("idBoard", Some("b1"))
            .with_optional_param("pos", None::<String>);
        assert_eq!(endpoint.param("name"), Some("Backlog"));
        assert_eq!(endpoint.param("idBoard"), Some("b1"));
        assert_eq!(endpoint.param("pos"), None);
        assert_eq!(endpoint.params.len(), 2);
    }
}
