use std::sync::Arc;

use crate::collections::BoardCollection;
use crate::error::Result;
use crate::models::OrganizationJson;
use crate::sync::{Field, SyncContext};
use crate::validation::NotNullOrWhiteSpaceRule;

static DISPLAY_NAME: Field<OrganizationJson, String> = Field::new(
    "DisplayName",
    "displayName",
    |json: &OrganizationJson| json.display_name.clone(),
    |json: &mut OrganizationJson, value: Option<String>| json.display_name = value,
    &[&NotNullOrWhiteSpaceRule],
);

static DESCRIPTION: Field<OrganizationJson, String> = Field::new(
    "Description",
    "desc",
    |json: &OrganizationJson| json.desc.clone(),
    |json: &mut OrganizationJson, value: Option<String>| json.desc = value,
    &[],
);

static WEBSITE: Field<OrganizationJson, String> = Field::new(
    "Website",
    "website",
    |json: &OrganizationJson| json.website.clone(),
    |json: &mut OrganizationJson, value: Option<String>| json.website = value,
    &[],
);

/// A Trello team.
#[derive(Clone)]
pub struct Organization {
    ctx: Arc<SyncContext<OrganizationJson>>,
    boards: Arc<BoardCollection>,
}

entity_handle!(Organization, OrganizationJson);

impl Organization {
    fn build(ctx: Arc<SyncContext<OrganizationJson>>) -> Self {
        Self {
            boards: Arc::new(BoardCollection::for_organization(ctx.client().clone(), ctx.id())),
            ctx,
        }
    }

    pub fn id(&self) -> &str {
        self.ctx.id()
    }

    /// Short name used in URLs.
    pub async fn name(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.name.clone()).await
    }

    pub async fn display_name(&self) -> Result<Option<String>> {
        DISPLAY_NAME.get(&self.ctx).await
    }

    pub async fn set_display_name(&self, display_name: &str) -> Result<()> {
        DISPLAY_NAME.set(&self.ctx, Some(display_name.to_string())).await
    }

    pub async fn description(&self) -> Result<Option<String>> {
        DESCRIPTION.get(&self.ctx).await
    }

    pub async fn set_description(&self, description: Option<&str>) -> Result<()> {
        DESCRIPTION.set(&self.ctx, description.map(str::to_string)).await
    }

    pub async fn website(&self) -> Result<Option<String>> {
        WEBSITE.get(&self.ctx).await
    }

    pub async fn set_website(&self, website: Option<&str>) -> Result<()> {
        WEBSITE.set(&self.ctx, website.map(str::to_string)).await
    }

    pub async fn url(&self) -> Result<Option<String>> {
        self.ctx.read(|json| json.url.clone()).await
    }

    pub fn boards(&self) -> &BoardCollection {
        &self.boards
    }

    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }
}
