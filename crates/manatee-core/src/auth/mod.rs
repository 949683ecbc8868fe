//! Authentication for the Trello API.
//!
//! This module provides:
//! - `Authorization`: the application key / user token pair sent with every request
//! - `TokenStore`: OS-level storage of user tokens via keyring
//!
//! Trello tokens do not expire on their own, so nothing here tracks session age.

pub mod authorization;
pub mod credentials;

pub use authorization::Authorization;
pub use credentials::TokenStore;
