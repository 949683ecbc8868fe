use std::ops::Deref;

use crate::api::{EntityRequest, RestRequest};
use crate::client::TrelloClient;
use crate::entities::{self, Sticker};
use crate::error::Result;
use crate::models::StickerJson;
use crate::sync::Owner;
use crate::validation::{self, FiniteRule, NotNullOrWhiteSpaceRule, NumericRule};

static ROTATION: NumericRule<i32> = NumericRule {
    min: Some(0),
    max: Some(359),
};

/// Stickers placed on a card.
#[derive(Debug)]
pub struct CardStickerCollection {
    inner: super::ReadOnlyCollection<Sticker>,
}

impl CardStickerCollection {
    pub(crate) fn new(client: TrelloClient, card_id: &str) -> Self {
        let endpoint = EntityRequest::CardReadStickers { id: card_id }.endpoint();
        Self {
            inner: super::ReadOnlyCollection::new(client, Owner::Card(card_id.to_string()), endpoint),
        }
    }

    /// Place a sticker on the card.
    ///
    /// `name` must not be blank, `left` and `top` must be finite and
    /// `rotation` must be within `0..=359`; nothing is sent otherwise.
    pub async fn add(
        &self,
        name: &str,
        left: f64,
        top: f64,
        z_index: i32,
        rotation: i32,
    ) -> Result<Sticker> {
        let name = name.to_string();
        validation::check("name", None, Some(&name), &[&NotNullOrWhiteSpaceRule])?;
        validation::check("left", None, Some(&left), &[&FiniteRule])?;
        validation::check("top", None, Some(&top), &[&FiniteRule])?;
        validation::check("rotation", None, Some(&rotation), &[&ROTATION])?;

        let endpoint = EntityRequest::CardAddSticker { id: self.owner().id() }
            .endpoint()
            .with_param("image", name)
            .with_param("top", top.to_string())
            .with_param("left", left.to_string())
            .with_param("zIndex", z_index.to_string())
            .with_param("rotate", rotation.to_string());

        let json: StickerJson = self.client().execute(endpoint).await?;
        self.refresh().await;
        Ok(entities::materialize(self.client(), json, Some(self.owner())).await)
    }

    /// Take a sticker off the card.
    pub async fn remove(&self, sticker: &Sticker) -> Result<()> {
        let endpoint = EntityRequest::CardRemoveSticker {
            card_id: self.owner().id(),
            sticker_id: sticker.id(),
        }
        .endpoint();

        self.client().execute_discarding(endpoint).await?;
        self.refresh().await;
        Ok(())
    }
}

impl Deref for CardStickerCollection {
    type Target = super::ReadOnlyCollection<Sticker>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// A member's custom sticker set.
#[derive(Debug)]
pub struct MemberStickerCollection {
    inner: super::ReadOnlyCollection<Sticker>,
}

impl MemberStickerCollection {
    pub(crate) fn new(client: TrelloClient, member_id: &str) -> Self {
        let endpoint = EntityRequest::MemberReadCustomStickers { id: member_id }.endpoint();
        Self {
            inner: super::ReadOnlyCollection::new(client, Owner::Member(member_id.to_string()), endpoint),
        }
    }

    /// Upload an image as a new custom sticker.
    pub async fn add(&self, content: Vec<u8>, file_name: &str) -> Result<Sticker> {
        let request = RestRequest::new(EntityRequest::MemberAddCustomSticker { id: self.owner().id() }.endpoint())
            .with_file(content, file_name);

        let json: StickerJson = self.client().execute_request(request).await?;
        self.refresh().await;
        Ok(entities::materialize(self.client(), json, Some(self.owner())).await)
    }
}

impl Deref for MemberStickerCollection {
    type Target = super::ReadOnlyCollection<Sticker>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
