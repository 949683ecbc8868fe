use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};

/// A plugin enabled on a board. Read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PowerUpJson {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub public: Option<bool>,
}

impl Identified for PowerUpJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for PowerUpJson {
    const KIND: &'static str = "power-up";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::PowerUpRead { id: &key.id }.endpoint()
    }
}
