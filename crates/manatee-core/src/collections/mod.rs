//! Typed wrappers around Trello list endpoints.
//!
//! A [`ReadOnlyCollection`] lists the entities nested under one owner. The
//! read-write collections deref to it and add the create/remove calls the
//! API offers for that resource.

mod board;
mod list;
mod sticker;

pub use board::{BoardCollection, BoardListCollection};
pub use list::ListCardCollection;
pub use sticker::{CardStickerCollection, MemberStickerCollection};

use std::fmt;

use tokio::sync::Mutex;
use tracing::debug;

use crate::api::Endpoint;
use crate::cache::CachedData;
use crate::client::TrelloClient;
use crate::entities::{self, Entity};
use crate::error::Result;
use crate::sync::Owner;

/// The entities returned by one list endpoint, refreshed like a field.
pub struct ReadOnlyCollection<E> {
    client: TrelloClient,
    owner: Owner,
    endpoint: Endpoint,
    items: Mutex<CachedData<Vec<E>>>,
}

impl<E: Entity> ReadOnlyCollection<E> {
    pub(crate) fn new(client: TrelloClient, owner: Owner, endpoint: Endpoint) -> Self {
        Self {
            client,
            owner,
            endpoint,
            items: Mutex::new(CachedData::unfetched(Vec::new())),
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub(crate) fn client(&self) -> &TrelloClient {
        &self.client
    }

    /// Current items, fetching the listing first if it has expired.
    ///
    /// An entity already known by id keeps its context; the listed JSON is
    /// merged into it.
    pub async fn list(&self) -> Result<Vec<E>> {
        let mut items = self.items.lock().await;
        if items.is_stale(self.client.refresh_after()) {
            debug!(path = %self.endpoint.path, "Refreshing collection");
            let fetched: Vec<E::Json> = self.client.execute(self.endpoint.clone()).await?;
            items.data = entities::materialize_all(&self.client, fetched, Some(&self.owner)).await;
            items.touch();
        }
        Ok(items.data.clone())
    }

    /// Mark the listing to be fetched again on the next call to [`list`](Self::list).
    pub async fn refresh(&self) {
        self.items.lock().await.expire();
    }
}

impl<E> fmt::Debug for ReadOnlyCollection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReadOnlyCollection")
            .field("owner", &self.owner)
            .field("path", &self.endpoint.path)
            .finish()
    }
}
