use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, Owner, SyncKey, Synchronized};

/// Id Trello resolves to the member owning the user token
const CURRENT_MEMBER: &str = "me";

/// A sticker placed on a card, or a custom sticker uploaded by a member.
///
/// Card stickers are addressed through their card and can be moved or
/// rotated. Custom stickers are addressed through their member and are
/// read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StickerJson {
    #[serde(default)]
    pub id: String,
    /// Sticker name, e.g. `taco-cool`, or the id of a custom sticker.
    pub image: Option<String>,
    #[serde(rename = "imageUrl", alias = "url")]
    pub image_url: Option<String>,
    pub left: Option<f64>,
    pub top: Option<f64>,
    #[serde(rename = "zIndex")]
    pub z_index: Option<i32>,
    pub rotate: Option<i32>,
}

impl Identified for StickerJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for StickerJson {
    const KIND: &'static str = "sticker";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        match &key.owner {
            Some(Owner::Card(card_id)) => EntityRequest::CardReadSticker {
                card_id,
                sticker_id: &key.id,
            }
            .endpoint(),
            Some(owner) => EntityRequest::MemberReadCustomSticker {
                member_id: owner.id(),
                sticker_id: &key.id,
            }
            .endpoint(),
            None => EntityRequest::MemberReadCustomSticker {
                member_id: CURRENT_MEMBER,
                sticker_id: &key.id,
            }
            .endpoint(),
        }
    }

    fn write_endpoint(&self, key: &SyncKey) -> Option<Endpoint> {
        match &key.owner {
            Some(Owner::Card(card_id)) => Some(
                EntityRequest::CardWriteSticker {
                    card_id,
                    sticker_id: &key.id,
                }
                .endpoint(),
            ),
            _ => None,
        }
    }
}
