use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::api::EntityRequest;
use crate::collections::{CardStickerCollection, ReadOnlyCollection};
use crate::error::Result;
use crate::models::{CardJson, Position};
use crate::sync::{Field, Owner, SyncContext};
use crate::validation::{NotNullOrWhiteSpaceRule, NotNullRule, PositionRule};

use super::{Action, Board, List};

static NAME: Field<CardJson, String> = Field::new(
    "Name",
    "name",
    |json: &CardJson| json.name.clone(),
    |json: &mut CardJson, value: Option<String>| json.name = value,
    &[&NotNullOrWhiteSpaceRule],
);

static DESCRIPTION: Field<CardJson, String> = Field::new(
    "Description",
    "desc",
    |json: &CardJson| json.desc.clone(),
    |json: &mut CardJson, value: Option<String>| json.desc = value,
    &[],
);

static CLOSED: Field<CardJson, bool> = Field::new(
    "IsArchived",
    "closed",
    |json: &CardJson| json.closed,
    |json: &mut CardJson, value: Option<bool>| json.closed = value,
    &[&NotNullRule],
);

static DUE: Field<CardJson, DateTime<Utc>> = Field::new(
    "DueDate",
    "due",
    |json: &CardJson| json.due,
    |json: &mut CardJson, value: Option<DateTime<Utc>>| json.due = value,
    &[],
);

static POSITION: Field<CardJson, Position> = Field::new(
    "Position",
    "pos",
    |json: &CardJson| json.pos,
    |json: &mut CardJson, value: Option<Position>| json.pos = value,
    &[&NotNullRule, &PositionRule],
);

/// A card on a list.
#[derive(Clone)]
pub struct Card {
    ctx: Arc<SyncContext<CardJson>>,
    actions: Arc<ReadOnlyCollection<Action>>,
    stickers: Arc<CardStickerCollection>,
}

entity_handle!(Card, CardJson);

impl Card {
    fn build(ctx: Arc<SyncContext<CardJson>>) -> Self {
        let client = ctx.client().clone();
        let id = ctx.id().to_string();

        Self {
            actions: Arc::new(ReadOnlyCollection::new(
                client.clone(),
                Owner::Card(id.clone()),
                EntityRequest::CardReadActions { id: &id }.endpoint(),
            )),
            stickers: Arc::new(CardStickerCollection::new(client, &id)),
            ctx,
        }
    }

    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    pub async fn name(&self) -> Result<Option<String>> {
        NAME.get(&self.ctx).await
    }

    pub async fn set_name(&self, name: &str) -> Result<()> {
        NAME.set(&self.ctx, Some(name.to_string())).await
    }

    pub async fn description(&self) -> Result<Option<String>> {
        DESCRIPTION.get(&self.ctx).await
    }

    pub async fn set_description(&self, description: Option<&str>) -> Result<()> {
        DESCRIPTION.set(&self.ctx, description.map(str::to_string)).await
    }

    pub async fn is_archived(&self) -> Result<Option<bool>> {
        CLOSED.get(&self.ctx).await
    }

    pub async fn set_archived(&self, archived: bool) -> Result<()> {
        CLOSED.set(&self.ctx, Some(archived)).await
    }

    pub async fn due_date(&self) -> Result<Option<DateTime<Utc>>> {
        DUE.get(&self.ctx).await
    }

    /// `None` clears the due date.
    pub async fn set_due_date(&self, due: Option<DateTime<Utc>>) -> Result<()> {
        DUE.set(&self.ctx, due).await
    }

    pub async fn position(&self) -> Result<Option<Position>> {
        POSITION.get(&self.ctx).await
    }

    pub async fn set_position(&self, position: Position) -> Result<()> {
        POSITION.set(&self.ctx, Some(position)).await
    }

    pub async fn url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.url.clone()).await
    }

    pub async fn short_url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.short_url.clone()).await
    }

    pub async fn last_activity(&self) -> Result<Option<DateTime<Utc>>> {
        self.ctx.read(|json| json.date_last_activity).await
    }

    pub async fn board(&self) -> Result<Option<Board>> {
        let id = self.ctx.read(|json| json.id_board.clone()).await?;
        Ok(id.map(|id| self.ctx.client().board(&id)))
    }

    pub async fn list(&self) -> Result<Option<List>> {
        let id = self.ctx.read(|json| json.id_list.clone()).await?;
        Ok(id.map(|id| self.ctx.client().list(&id)))
    }

    pub fn actions(&self) -> &ReadOnlyCollection<Action> {
        &self.actions
    }

    pub fn stickers(&self) -> &CardStickerCollection {
        &self.stickers
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_must_be_positive() {
        assert!(POSITION.validate(None, Some(&Position::At(-1.0))).is_err());
        assert!(POSITION.validate(None, None).is_err());
        assert!(POSITION.validate(None, Some(&Position::Top)).is_ok());
    }

    #[test]
    fn test_due_date_may_be_cleared() {
        assert!(DUE.validate(None, None).is_ok());
    }
}
