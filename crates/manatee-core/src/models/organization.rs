use serde::{Deserialize, Serialize};

use crate::api::{Endpoint, EntityRequest};
use crate::sync::{Identified, SyncKey, Synchronized};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganizationJson {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
    pub desc: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
}

impl Identified for OrganizationJson {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Synchronized for OrganizationJson {
    const KIND: &'static str = "organization";

    fn read_endpoint(&self, key: &SyncKey) -> Endpoint {
        EntityRequest::OrganizationRead { id: &key.id }.endpoint()
    }

    fn write_endpoint(&self, key: &SyncKey) -> Option<Endpoint> {
        Some(EntityRequest::OrganizationWrite { id: &key.id }.endpoint())
    }
}
