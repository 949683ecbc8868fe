//! Full-text search across boards, cards, members and more.
//!
//! A [`Search`] fixes its query when it is created and fetches results
//! lazily, like any other entity. Searches are not shared through the entity
//! cache; the entities they return are.

use std::fmt;
use std::sync::Arc;

use crate::client::TrelloClient;
use crate::entities::{self, Action, Board, Card, Entity, Member, Organization};
use crate::error::Result;
use crate::models::SearchJson;
use crate::sync::{SyncContext, SyncKey};
use crate::validation::{self, NotNullOrWhiteSpaceRule};

pub use crate::models::SearchModelType;

/// Narrows a search to specific boards, cards or organizations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryContext {
    Board(String),
    Card(String),
    Organization(String),
}

impl From<&Board> for QueryContext {
    fn from(board: &Board) -> Self {
        QueryContext::Board(board.id().to_string())
    }
}

impl From<&Card> for QueryContext {
    fn from(card: &Card) -> Self {
        QueryContext::Card(card.id().to_string())
    }
}

impl From<&Organization> for QueryContext {
    fn from(organization: &Organization) -> Self {
        QueryContext::Organization(organization.id().to_string())
    }
}

/// Results of one query.
#[derive(Clone)]
pub struct Search {
    ctx: Arc<SyncContext<SearchJson>>,
}

impl Search {
    /// Prepare a search. Fails without any request when `query` is blank.
    pub fn new(
        client: &TrelloClient,
        query: &str,
        model_types: SearchModelType,
        context: &[QueryContext],
    ) -> Result<Self> {
        let query = query.to_string();
        validation::check("Query", None, Some(&query), &[&NotNullOrWhiteSpaceRule])?;

        let mut json = SearchJson {
            query,
            model_types,
            ..Default::default()
        };
        for item in context {
            match item {
                QueryContext::Board(id) => json.board_ids.push(id.clone()),
                QueryContext::Card(id) => json.card_ids.push(id.clone()),
                QueryContext::Organization(id) => json.organization_ids.push(id.clone()),
            }
        }

        Ok(Self {
            ctx: Arc::new(SyncContext::new(client.clone(), SyncKey::new("search"), json)),
        })
    }

    pub async fn query(&self) -> String {
        // Parameters are fixed at creation
        self.ctx.peek(|json| json.query.clone()).await
    }

    pub async fn model_types(&self) -> SearchModelType {
        self.ctx.peek(|json| json.model_types).await
    }

    pub async fn actions(&self) -> Result<Vec<Action>> {
        self.results(|json| json.actions.clone()).await
    }

    pub async fn boards(&self) -> Result<Vec<Board>> {
        self.results(|json| json.boards.clone()).await
    }

    pub async fn cards(&self) -> Result<Vec<Card>> {
        self.results(|json| json.cards.clone()).await
    }

    pub async fn members(&self) -> Result<Vec<Member>> {
        self.results(|json| json.members.clone()).await
    }

    pub async fn organizations(&self) -> Result<Vec<Organization>> {
        self.results(|json| json.organizations.clone()).await
    }

    /// Mark the results to be fetched again on the next read.
    pub async fn refresh(&self) {
        self.ctx.expire().await;
    }

    async fn results<E: Entity>(&self, select: impl FnOnce(&SearchJson) -> Vec<E::Json>) -> Result<Vec<E>> {
        let items = self.ctx.read(select).await?;
        Ok(entities::materialize_all(self.ctx.client(), items, None).await)
    }
}

impl fmt::Debug for Search {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Search").finish_non_exhaustive()
    }
}
