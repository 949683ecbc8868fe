//! Typed client for the Trello REST API.
//!
//! The crate is organized in three layers:
//!
//! - [`api`]: the HTTP client, the endpoint catalogue and the queued
//!   [`RequestProcessor`](api::RequestProcessor) that dispatches one call at a time.
//! - [`sync`]: lazily refreshed [`Field`](sync::Field)s over a shared
//!   [`SyncContext`](sync::SyncContext) per remote entity.
//! - [`entities`] and [`collections`]: typed handles (`Board`, `Card`, `Sticker`, ...)
//!   and list/add/remove wrappers around list endpoints.
//!
//! ```no_run
//! use manatee_core::{Authorization, TrelloClient, TrelloConfig};
//!
//! # async fn demo() -> manatee_core::Result<()> {
//! let auth = Authorization::new("app-key", Some("user-token".to_string()));
//! let client = TrelloClient::new(TrelloConfig::default(), auth)?;
//!
//! let board = client.board("5e9f1c2b8a1d4c3f2e1a0b9c");
//! println!("{:?}", board.name().await?);
//!
//! for list in board.lists().list().await? {
//!     println!("{:?}", list.name().await?);
//! }
//! client.shut_down().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod cache;
pub mod client;
pub mod collections;
pub mod config;
pub mod entities;
pub mod error;
pub mod models;
pub mod search;
pub mod sync;
pub mod validation;

pub use auth::{Authorization, TokenStore};
pub use client::TrelloClient;
pub use config::TrelloConfig;
pub use entities::{
    Action, Board, BoardPreferences, Card, List, Member, Organization, PowerUp, Sticker,
};
pub use error::{Error, Result};
pub use search::{QueryContext, Search, SearchModelType};
