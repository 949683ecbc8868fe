use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::ActionJson;
use crate::sync::SyncContext;

use super::Member;

/// A record of something that happened. Read-only.
#[derive(Clone)]
pub struct Action {
    ctx: Arc<SyncContext<ActionJson>>,
}

entity_handle!(Action, ActionJson);

impl Action {
    fn build(ctx: Arc<SyncContext<ActionJson>>) -> Self {
        Self { ctx }
    }

    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    /// Trello's action type, e.g. `createCard` or `updateList`.
    pub async fn action_type(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.action_type.clone()).await
    }

    pub async fn date(&self) -> Result<Option<DateTime<Utc>>> {
        self.ctx.read(|json| json.date).await
    }

    pub async fn creator(&self) -> Result<Option<Member>> {
        let id = self.ctx.read(|json| json.id_member_creator.clone()).await?;
        Ok(id.map(|id| self.ctx.client().member(&id)))
    }

    pub async fn data(&self) -> Result<serde_json::Value> {
        self.ctx.read(|json| json.data.clone()).await
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}
