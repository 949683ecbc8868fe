use std::sync::Arc;

use crate::collections::{BoardCollection, MemberStickerCollection};
use crate::error::Result;
use crate::models::{MemberJson, MemberStatus};
use crate::sync::{Field, SyncContext};
use crate::validation::{NotNullOrWhiteSpaceRule, StringLengthRule};

static FULL_NAME: Field<MemberJson, String> = Field::new(
    "FullName",
    "fullName",
    |json: &MemberJson| json.full_name.clone(),
    |json: &mut MemberJson, value: Option<String>| json.full_name = value,
    &[&NotNullOrWhiteSpaceRule],
);

static USERNAME: Field<MemberJson, String> = Field::new(
    "UserName",
    "username",
    |json: &MemberJson| json.username.clone(),
    |json: &mut MemberJson, value: Option<String>| json.username = value,
    &[&NotNullOrWhiteSpaceRule],
);

static INITIALS: Field<MemberJson, String> = Field::new(
    "Initials",
    "initials",
    |json: &MemberJson| json.initials.clone(),
    |json: &mut MemberJson, value: Option<String>| json.initials = value,
    &[&NotNullOrWhiteSpaceRule, &StringLengthRule { min: 1, max: 4 }],
);

static BIO: Field<MemberJson, String> = Field::new(
    "Bio",
    "bio",
    |json: &MemberJson| json.bio.clone(),
    |json: &mut MemberJson, value: Option<String>| json.bio = value,
    &[],
);

/// A Trello user.
#[derive(Clone)]
pub struct Member {
    ctx: Arc<SyncContext<MemberJson>>,
    boards: Arc<BoardCollection>,
    stickers: Arc<MemberStickerCollection>,
}

entity_handle!(Member, MemberJson);

impl Member {
    fn build(ctx: Arc<SyncContext<MemberJson>>) -> Self {
        let client = ctx.client().clone();
        Self {
            boards: Arc::new(BoardCollection::for_member(client.clone(), ctx.id())),
            stickers: Arc::new(MemberStickerCollection::new(client, ctx.id())),
            ctx,
        }
    }

    /// The id the member was requested with; `me` for the token owner.
    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    pub async fn full_name(&self) -> Result<Option<String>> {
        FULL_NAME.get(&self.ctx).await
    }

    pub async fn set_full_name(&self, full_name: &str) -> Result<()> {
        FULL_NAME.set(&self.ctx, Some(full_name.to_string())).await
    }

    pub async fn username(&self) -> Result<Option<String>> {
        USERNAME.get(&self.ctx).await
    }

    pub async fn set_username(&self, username: &str) -> Result<()> {
        USERNAME.set(&self.ctx, Some(username.to_string())).await
    }

    pub async fn initials(&self) -> Result<Option<String>> {
        INITIALS.get(&self.ctx).await
    }

    pub async fn set_initials(&self, initials: &str) -> Result<()> {
        INITIALS.set(&self.ctx, Some(initials.to_string())).await
    }

    pub async fn bio(&self) -> Result<Option<String>> {
        BIO.get(&self.ctx).await
    }

    pub async fn set_bio(&self, bio: Option<&str>) -> Result<()> {
        BIO.set(&self.ctx, bio.map(str::to_string)).await
    }

    pub async fn avatar_hash(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.avatar_hash.clone()).await
    }

    pub async fn url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.url.clone()).await
    }

    pub async fn is_confirmed(&self) -> Result<Option<bool>> {
        self.ctx.read(|json| json.confirmed).await
    }

    pub async fn status(&self) -> Result<Option<MemberStatus>> {
        self.ctx.read(|json| json.status).await
    }

    pub fn boards(&self) -> &BoardCollection {
        &self.boards
    }

    /// Custom stickers uploaded by the member.
    pub fn stickers(&self) -> &MemberStickerCollection {
        &self.stickers
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}
