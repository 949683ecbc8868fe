use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::api::Endpoint;
use crate::cache::CachedData;
use crate::client::TrelloClient;
use crate::error::{Error, Result};

use super::Field;

/// The entity an id is nested under, for entities addressed through a parent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Owner {
    Board(String),
    Card(String),
    List(String),
    Member(String),
    Organization(String),
}

impl Owner {
    pub fn id(&self) -> &str {
        match self {
            Owner::Board(id)
            | Owner::Card(id)
            | Owner::List(id)
            | Owner::Member(id)
            | Owner::Organization(id) => id,
        }
    }
}

/// Identifies one remote entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyncKey {
    pub id: String,
    pub owner: Option<Owner>,
}

impl SyncKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            owner: None,
        }
    }

    pub fn owned_by(id: impl Into<String>, owner: Owner) -> Self {
        Self {
            id: id.into(),
            owner: Some(owner),
        }
    }
}

/// JSON payloads with an `id`.
pub trait Identified {
    fn id(&self) -> &str;
}

/// A JSON payload that knows where it is read from and written to.
pub trait Synchronized: DeserializeOwned + Default + Clone + Debug + Send + Sync + 'static {
    /// Entity kind, for logs.
    const KIND: &'static str;

    /// Request that fetches the current remote state.
    fn read_endpoint(&self, key: &SyncKey) -> Endpoint;

    /// Request that writes one property, or `None` for read-only entities.
    fn write_endpoint(&self, _key: &SyncKey) -> Option<Endpoint> {
        None
    }

    /// Id Trello reports for the payload, when it may differ from the id it
    /// was requested by (`me` for members).
    fn canonical_id(&self) -> Option<&str> {
        None
    }

    /// Fold freshly fetched data into the cached value.
    fn absorb(&mut self, fetched: Self) {
        *self = fetched;
    }
}

/// Shared cached state of one remote entity.
pub struct SyncContext<J> {
    key: SyncKey,
    client: TrelloClient,
    state: Mutex<CachedData<J>>,
}

impl<J: Synchronized> SyncContext<J> {
    /// A context that fetches on first read.
    pub fn new(client: TrelloClient, key: SyncKey, data: J) -> Self {
        Self {
            key,
            client,
            state: Mutex::new(CachedData::unfetched(data)),
        }
    }

    pub fn key(&self) -> &SyncKey {
        &self.key
    }

    pub fn id(&self) -> &str {
        &self.key.id
    }

    pub fn client(&self) -> &TrelloClient {
        &self.client
    }

    /// Mark the context to be refreshed on the next read.
    pub async fn expire(&self) {
        self.state.lock().await.expire();
    }

    /// Replace the cached data with JSON obtained elsewhere and mark it fresh.
    pub async fn merge(&self, data: J) {
        let mut state = self.state.lock().await;
        state.data.absorb(data);
        state.touch();
    }

    /// Refresh if expired, then project the cached data through `f`.
    ///
    /// The lock is held across the fetch so concurrent readers share one call.
    pub async fn read<T>(&self, f: impl FnOnce(&J) -> T) -> Result<T> {
        let mut state = self.state.lock().await;
        if state.is_stale(self.client.refresh_after()) {
            let endpoint = state.data.read_endpoint(&self.key);
            debug!(kind = J::KIND, id = %self.key.id, "Refreshing expired context");
            let fetched: J = self.client.execute(endpoint).await?;
            state.data.absorb(fetched);
            state.touch();
            self.register_canonical_id(&state.data);
        }
        Ok(f(&state.data))
    }

    /// Project the cached data as it is, without refreshing.
    pub async fn peek<T>(&self, f: impl FnOnce(&J) -> T) -> T {
        f(&self.state.lock().await.data)
    }

    /// Make the context reachable under the id Trello reported for it too.
    fn register_canonical_id(&self, data: &J) {
        if let Some(id) = data.canonical_id() {
            if !id.is_empty() && id != self.key.id {
                let alias = SyncKey {
                    id: id.to_string(),
                    owner: self.key.owner.clone(),
                };
                self.client.cache().alias::<J>(&self.key, alias);
            }
        }
    }

    /// Validate, stage locally, then send a single-property update.
    pub(crate) async fn write<T>(&self, field: &Field<J, T>, value: Option<T>) -> Result<()>
    where
        T: Serialize + Debug + Send + 'static,
    {
        let mut state = self.state.lock().await;

        let current = field.extract(&state.data);
        field.validate(current.as_ref(), value.as_ref())?;

        let endpoint = state
            .data
            .write_endpoint(&self.key)
            .ok_or(Error::ReadOnly { field: field.name() })?;
        let param = match value.as_ref() {
            Some(v) => to_param(field.key(), v)?,
            None => String::new(),
        };

        field.stage(&mut state.data, value);

        debug!(kind = J::KIND, id = %self.key.id, field = field.name(), "Submitting change");
        match self
            .client
            .execute::<J>(endpoint.with_param(field.key(), param))
            .await
        {
            Ok(updated) => {
                state.data.absorb(updated);
                state.touch();
                self.register_canonical_id(&state.data);
                Ok(())
            }
            Err(e) => {
                // The staged value may not match the remote anymore
                warn!(kind = J::KIND, id = %self.key.id, field = field.name(), error = %e, "Update failed");
                state.expire();
                Err(e)
            }
        }
    }
}

/// Render a value as a query parameter: strings unquoted, everything else as JSON.
pub(crate) fn to_param<T: Serialize>(key: &str, value: &T) -> Result<String> {
    let value = serde_json::to_value(value).map_err(|source| Error::Param {
        key: key.to_string(),
        source,
    })?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_param() {
        assert_eq!(to_param("name", &"Roadmap").unwrap(), "Roadmap");
        assert_eq!(to_param("closed", &true).unwrap(), "true");
        assert_eq!(to_param("rotate", &45).unwrap(), "45");
        assert_eq!(to_param("left", &12.5).unwrap(), "12.5");
        assert_eq!(to_param("due", &None::<String>).unwrap(), "");
    }

    #[test]
    fn test_to_param_failure_names_the_parameter() {
        let mut unencodable = std::collections::BTreeMap::new();
        unencodable.insert(vec![1u8], 1);
        let err = to_param("labels", &unencodable).unwrap_err();
        assert!(matches!(err, Error::Param { ref key, .. } if key == "labels"));
        assert!(err.to_string().starts_with("Failed to encode labels parameter"));
    }

    #[test]
    fn test_owner_id() {
        assert_eq!(Owner::Card("c1".into()).id(), "c1");
        let key = SyncKey::owned_by("s1", Owner::Member("me".into()));
        assert_eq!(key.owner.as_ref().map(Owner::id), Some("me"));
    }
}
