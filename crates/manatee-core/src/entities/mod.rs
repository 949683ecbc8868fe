//! Typed handles over cached Trello entities.
//!
//! A handle is a cheap clone of an `Arc` to the entity's
//! [`SyncContext`]. Getters refresh the context when it has expired; setters
//! validate, then send one update. Every handle to the same id shares one
//! context through the client's [`EntityCache`](crate::cache::EntityCache).

/// Implements `Entity` and `Debug` for a handle holding its context in `ctx`.
macro_rules! entity_handle {
    ($handle:ident, $json:ty) => {
        impl $crate::entities::Entity for $handle {
            type Json = $json;

            fn from_context(ctx: ::std::sync::Arc<$crate::sync::SyncContext<$json>>) -> Self {
                Self::build(ctx)
            }

            fn context(&self) -> &::std::sync::Arc<$crate::sync::SyncContext<$json>> {
                &self.ctx
            }
        }

        impl ::std::fmt::Debug for $handle {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($handle)).field("id", &self.ctx.id()).finish()
            }
        }
    };
}

mod action;
mod board;
mod card;
mod list;
mod member;
mod organization;
mod power_up;
mod sticker;

pub use action::Action;
pub use board::{Board, BoardPreferences};
pub use card::Card;
pub use list::List;
pub use member::Member;
pub use organization::Organization;
pub use power_up::PowerUp;
pub use sticker::Sticker;

use std::sync::Arc;

use futures::future::join_all;

use crate::client::TrelloClient;
use crate::sync::{Identified, Owner, SyncContext, SyncKey, Synchronized};

/// A typed handle backed by one synchronization context.
pub trait Entity: Clone + Send + Sync + Sized + 'static {
    type Json: Synchronized + Identified;

    fn from_context(ctx: Arc<SyncContext<Self::Json>>) -> Self;

    fn context(&self) -> &Arc<SyncContext<Self::Json>>;

    /// Cache key for `json` when it was listed under `owner`.
    fn sync_key(json: &Self::Json, _owner: Option<&Owner>) -> SyncKey {
        SyncKey::new(json.id())
    }
}

/// Handle for JSON obtained from a listing or a create call.
///
/// Reuses the cached context for the same id when there is one and marks it
/// fresh with `json`.
pub(crate) async fn materialize<E: Entity>(
    client: &TrelloClient,
    json: E::Json,
    owner: Option<&Owner>,
) -> E {
    let ctx = client.context::<E::Json>(E::sync_key(&json, owner));
    ctx.merge(json).await;
    E::from_context(ctx)
}

pub(crate) async fn materialize_all<E: Entity>(
    client: &TrelloClient,
    items: Vec<E::Json>,
    owner: Option<&Owner>,
) -> Vec<E> {
    join_all(items.into_iter().map(|json| materialize::<E>(client, json, owner))).await
}
