//! REST plumbing for the Trello API.
//!
//! - `ApiClient` sends a single request and classifies the HTTP status.
//! - `EntityRequest` names every call the library makes and builds its `Endpoint`.
//! - `RequestProcessor` queues requests and dispatches them one at a time.
//!
//! Trello authenticates with an application key and a user token, both sent
//! as query parameters on every request.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod processor;
pub mod request;

pub use client::ApiClient;
pub use endpoint::{Endpoint, EntityRequest};
pub use error::ApiError;
pub use processor::RequestProcessor;
pub use request::{RestFile, RestRequest};
