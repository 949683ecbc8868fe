use std::ops::Deref;

use crate::api::EntityRequest;
use crate::client::TrelloClient;
use crate::entities::{self, Board, List};
use crate::error::Result;
use crate::models::{BoardJson, ListJson};
use crate::sync::Owner;
use crate::validation::{self, NotNullOrWhiteSpaceRule};

use super::ReadOnlyCollection;

/// Boards a member belongs to.
#[derive(Debug)]
pub struct BoardCollection {
    inner: ReadOnlyCollection<Board>,
}

impl BoardCollection {
    pub(crate) fn for_member(client: TrelloClient, member_id: &str) -> Self {
        let endpoint = EntityRequest::MemberReadBoards { id: member_id }.endpoint();
        Self {
            inner: ReadOnlyCollection::new(client, Owner::Member(member_id.to_string()), endpoint),
        }
    }

    pub(crate) fn for_organization(client: TrelloClient, org_id: &str) -> Self {
        let endpoint = EntityRequest::OrganizationReadBoards { id: org_id }.endpoint();
        Self {
            inner: ReadOnlyCollection::new(client, Owner::Organization(org_id.to_string()), endpoint),
        }
    }

    /// Create a board. Boards listed under an organization are created in it.
    pub async fn add(&self, name: &str) -> Result<Board> {
        let name = name.to_string();
        validation::check("name", None, Some(&name), &[&NotNullOrWhiteSpaceRule])?;

        let org_id = match self.owner() {
            Owner::Organization(id) => Some(id.as_str()),
            _ => None,
        };
        let endpoint = EntityRequest::BoardCreate
            .endpoint()
            .with_param("name", name)
            .with_optional_param("idOrganization", org_id);

        let json: BoardJson = self.client().execute(endpoint).await?;
        self.refresh().await;
        Ok(entities::materialize(self.client(), json, None).await)
    }
}

impl Deref for BoardCollection {
    type Target = ReadOnlyCollection<Board>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Open lists of a board.
#[derive(Debug)]
pub struct BoardListCollection {
    inner: ReadOnlyCollection<List>,
}

impl BoardListCollection {
    pub(crate) fn new(client: TrelloClient, board_id: &str) -> Self {
        let endpoint = EntityRequest::BoardReadLists { id: board_id }.endpoint();
        Self {
            inner: ReadOnlyCollection::new(client, Owner::Board(board_id.to_string()), endpoint),
        }
    }

    /// Create a list at the bottom of the board.
    pub async fn add(&self, name: &str) -> Result<List> {
        let name = name.to_string();
        validation::check("name", None, Some(&name), &[&NotNullOrWhiteSpaceRule])?;

        let endpoint = EntityRequest::ListCreate
            .endpoint()
            .with_param("name", name)
            .with_param("idBoard", self.owner().id())
            .with_param("pos", "bottom");

        let json: ListJson = self.client().execute(endpoint).await?;
        self.refresh().await;
        Ok(entities::materialize(self.client(), json, None).await)
    }
}

impl Deref for BoardListCollection {
    type Target = ReadOnlyCollection<List>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
