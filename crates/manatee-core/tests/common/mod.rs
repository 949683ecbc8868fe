//! Shared setup for the wiremock-backed integration tests.

#![allow(dead_code)]

use manatee_core::{Authorization, TrelloClient, TrelloConfig};
use wiremock::MockServer;

pub const APP_KEY: &str = "test-app-key";
pub const USER_TOKEN: &str = "test-user-token";

/// Cached data stays fresh for the whole test.
pub const NEVER_STALE: u64 = 3600;

/// Cached data is stale as soon as it is stored.
pub const ALWAYS_STALE: u64 = 0;

/// Client pointed at `server`.
pub fn client_for(server: &MockServer, refresh_after_secs: u64) -> TrelloClient {
    let config = TrelloConfig {
        api_base_url: server.uri(),
        refresh_after_secs,
        request_timeout_secs: 5,
        ..TrelloConfig::default()
    };
    let auth = Authorization::new(APP_KEY, Some(USER_TOKEN.to_string()));
    TrelloClient::new(config, auth).expect("client should start")
}

/// Number of requests the server has seen so far.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}
