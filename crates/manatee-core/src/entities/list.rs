use std::sync::Arc;

use crate::collections::ListCardCollection;
use crate::error::Result;
use crate::models::{ListJson, Position};
use crate::sync::{Field, SyncContext};
use crate::validation::{NotNullOrWhiteSpaceRule, NotNullRule, PositionRule};

use super::Board;

static NAME: Field<ListJson, String> = Field::new(
    "Name",
    "name",
    |json: &ListJson| json.name.clone(),
    |json: &mut ListJson, value: Option<String>| json.name = value,
    &[&NotNullOrWhiteSpaceRule],
);

static CLOSED: Field<ListJson, bool> = Field::new(
    "IsArchived",
    "closed",
    |json: &ListJson| json.closed,
    |json: &mut ListJson, value: Option<bool>| json.closed = value,
    &[&NotNullRule],
);

static POSITION: Field<ListJson, Position> = Field::new(
    "Position",
    "pos",
    |json: &ListJson| json.pos,
    |json: &mut ListJson, value: Option<Position>| json.pos = value,
    &[&NotNullRule, &PositionRule],
);

static SUBSCRIBED: Field<ListJson, bool> = Field::new(
    "IsSubscribed",
    "subscribed",
    |json: &ListJson| json.subscribed,
    |json: &mut ListJson, value: Option<bool>| json.subscribed = value,
    &[&NotNullRule],
);

/// A list on a board.
#[derive(Clone)]
pub struct List {
    ctx: Arc<SyncContext<ListJson>>,
    cards: Arc<ListCardCollection>,
}

entity_handle!(List, ListJson);

impl List {
    fn build(ctx: Arc<SyncContext<ListJson>>) -> Self {
        Self {
            cards: Arc::new(ListCardCollection::new(ctx.client().clone(), ctx.id())),
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

    pub async fn is_archived(&self) -> Result<Option<bool>> {
        CLOSED.get(&self.ctx).await
    }

    pub async fn set_archived(&self, archived: bool) -> Result<()> {
        CLOSED.set(&self.ctx, Some(archived)).await
    }

    pub async fn position(&self) -> Result<Option<Position>> {
        POSITION.get(&self.ctx).await
    }

    pub async fn set_position(&self, position: Position) -> Result<()> {
        POSITION.set(&self.ctx, Some(position)).await
    }

    pub async fn is_subscribed(&self) -> Result<Option<bool>> {
        SUBSCRIBED.get(&self.ctx).await
    }

    pub async fn set_subscribed(&self, subscribed: bool) -> Result<()> {
        SUBSCRIBED.set(&self.ctx, Some(subscribed)).await
    }

    pub async fn board(&self) -> Result<Option<Board>> {
        let id = self.ctx.read(|json| json.id_board.clone()).await?;
        Ok(id.map(|id| self.ctx.client().board(&id)))
    }

    pub fn cards(&self) -> &ListCardCollection {
        &self.cards
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}
