use std::sync::Arc;

use crate::error::Result;
use crate::models::PowerUpJson;
use crate::sync::SyncContext;

/// A plugin available to boards. Read-only.
#[derive(Clone)]
pub struct PowerUp {
    ctx: Arc<SyncContext<PowerUpJson>>,
}

entity_handle!(PowerUp, PowerUpJson);

impl PowerUp {
    fn build(ctx: Arc<SyncContext<PowerUpJson>>) -> Self {
        Self { ctx }
    }

    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    pub async fn name(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.name.clone()).await
    }

    pub async fn is_public(&self) -> Result<Option<bool>> {
        self.ctx.read(|json| json.public).await
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}
