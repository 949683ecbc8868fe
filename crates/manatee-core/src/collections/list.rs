use std::ops::Deref;

use crate::api::EntityRequest;
use crate::client::TrelloClient;
use crate::entities::{self, Card};
use crate::error::Result;
use crate::models::CardJson;
use crate::sync::Owner;
use crate::validation::{self, NotNullOrWhiteSpaceRule};

use super::ReadOnlyCollection;

/// Open cards of a list.
#[derive(Debug)]
pub struct ListCardCollection {
    inner: ReadOnlyCollection<Card>,
}

impl ListCardCollection {
    pub(crate) fn new(client: TrelloClient, list_id: &str) -> Self {
        let endpoint = EntityRequest::ListReadCards { id: list_id }.endpoint();
        Self {
            inner: ReadOnlyCollection::new(client, Owner::List(list_id.to_string()), endpoint),
        }
    }

    /// Create a card at the bottom of the list.
    pub async fn add(&self, name: &str, description: Option<&str>) -> Result<Card> {
        let name = name.to_string();
        validation::check("name", None, Some(&name), &[&NotNullOrWhiteSpaceRule])?;

        let endpoint = EntityRequest::CardCreate
            .endpoint()
            .with_param("name", name)
            .with_param("idList", self.owner().id())
            .with_optional_param("desc", description);

        let json: CardJson = self.client().execute(endpoint).await?;
        self.refresh().await;
        Ok(entities::materialize(self.client(), json, None).await)
    }
}

impl Deref for ListCardCollection {
    type Target = ReadOnlyCollection<Card>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
