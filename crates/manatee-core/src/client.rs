//! Entry point of the library.
//!
//! `TrelloClient` owns the request processor, the entity cache and the
//! configuration. It is cheap to clone; every clone talks through the same
//! queue and sees the same cached entities.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::api::{ApiClient, Endpoint, RequestProcessor, RestRequest};
use crate::auth::Authorization;
use crate::cache::EntityCache;
use crate::config::TrelloConfig;
use crate::entities::{
    Action, Board, Card, Entity, List, Member, Organization, PowerUp, Sticker,
};
use crate::error::{Error, Result};
use crate::search::{QueryContext, Search, SearchModelType};
use crate::sync::{Owner, SyncContext, SyncKey, Synchronized};

/// Id Trello resolves to the member owning the user token
const CURRENT_MEMBER_ID: &str = "me";

struct Inner {
    processor: RequestProcessor,
    cache: EntityCache,
    config: TrelloConfig,
}

#[derive(Clone)]
pub struct TrelloClient {
    inner: Arc<Inner>,
}

impl TrelloClient {
    /// Create a client and start its request worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: TrelloConfig, auth: Authorization) -> Result<Self> {
        if !auth.has_app_key() {
            return Err(Error::MissingCredentials);
        }

        let api = ApiClient::new(&config.api_base_url, config.request_timeout())?;
        info!(base_url = %api.base_url(), authorized = auth.user_token().is_some(), "Starting Trello client");
        let processor = RequestProcessor::start(api, auth, config.queue_capacity);

        Ok(Self {
            inner: Arc::new(Inner {
                processor,
                cache: EntityCache::new(),
                config,
            }),
        })
    }

    pub fn config(&self) -> &TrelloConfig {
        &self.inner.config
    }

    pub fn processor(&self) -> &RequestProcessor {
        &self.inner.processor
    }

    pub fn cache(&self) -> &EntityCache {
        &self.inner.cache
    }

    pub(crate) fn refresh_after(&self) -> chrono::Duration {
        self.inner.config.refresh_after()
    }

    // ===== Request Execution =====

    /// Queue `endpoint` and deserialize the response.
    pub async fn execute<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T> {
        self.execute_request(RestRequest::new(endpoint)).await
    }

    pub async fn execute_request<T: DeserializeOwned>(&self, request: RestRequest) -> Result<T> {
        let path = request.endpoint.path.clone();
        let body = self.inner.processor.add_request(request).await?;
        serde_json::from_str(&body).map_err(|source| Error::Json {
            endpoint: path,
            source,
        })
    }

    /// Queue `endpoint` and ignore the response body.
    pub async fn execute_discarding(&self, endpoint: Endpoint) -> Result<()> {
        self.inner
            .processor
            .add_request(RestRequest::new(endpoint))
            .await
            .map(|_| ())
    }

    // ===== Entities =====

    pub(crate) fn context<J: Synchronized>(&self, key: SyncKey) -> Arc<SyncContext<J>> {
        self.inner
            .cache
            .find_or_insert(key.clone(), || SyncContext::new(self.clone(), key, J::default()))
    }

    /// Handle for the entity at `key`; nothing is fetched until a field is read.
    pub fn entity<E: Entity>(&self, key: SyncKey) -> E {
        E::from_context(self.context(key))
    }

    pub fn action(&self, id: &str) -> Action {
        self.entity(SyncKey::new(id))
    }

    pub fn board(&self, id: &str) -> Board {
        self.entity(SyncKey::new(id))
    }

    pub fn card(&self, id: &str) -> Card {
        self.entity(SyncKey::new(id))
    }

    pub fn list(&self, id: &str) -> List {
        self.entity(SyncKey::new(id))
    }

    pub fn member(&self, id: &str) -> Member {
        self.entity(SyncKey::new(id))
    }

    /// The member the user token belongs to.
    pub fn me(&self) -> Member {
        self.member(CURRENT_MEMBER_ID)
    }

    pub fn organization(&self, id: &str) -> Organization {
        self.entity(SyncKey::new(id))
    }

    pub fn power_up(&self, id: &str) -> PowerUp {
        self.entity(SyncKey::new(id))
    }

    /// A sticker placed on a card.
    pub fn card_sticker(&self, card_id: &str, sticker_id: &str) -> Sticker {
        self.entity(SyncKey::owned_by(sticker_id, Owner::Card(card_id.to_string())))
    }

    /// Start a search. The query is validated before anything is sent.
    pub fn search(
        &self,
        query: &str,
        model_types: SearchModelType,
        context: &[QueryContext],
    ) -> Result<Search> {
        Search::new(self, query, model_types, context)
    }

    /// Drain queued requests and stop the worker.
    pub async fn shut_down(&self) {
        debug!("Shutting down Trello client");
        self.inner.processor.shut_down().await;
    }
}
