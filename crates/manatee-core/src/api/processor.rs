//! Queued request dispatch.
//!
//! Requests are pushed onto a bounded FIFO channel and a single background
//! worker sends them one at a time. Each caller awaits its own response on a
//! oneshot channel. While the processor is inactive the worker holds the next
//! request until it is reactivated.

use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::auth::Authorization;
use crate::error::{Error, Result};

use super::{ApiClient, RestRequest};

struct QueuedRequest {
    request: RestRequest,
    respond: oneshot::Sender<Result<String>>,
}

/// Single-worker request queue in front of [`ApiClient`].
pub struct RequestProcessor {
    sender: Mutex<Option<mpsc::Sender<QueuedRequest>>>,
    active: watch::Sender<bool>,
    auth: Arc<RwLock<Authorization>>,
    worker: tokio::sync::Mutex<Option<JoinHandle<()>>>,
}

impl RequestProcessor {
    /// Spawn the worker task. Must be called from within a Tokio runtime.
    pub fn start(api: ApiClient, auth: Authorization, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::channel(capacity.max(1));
        let (active, active_rx) = watch::channel(true);
        let auth = Arc::new(RwLock::new(auth));

        let worker = tokio::spawn(run_queue(api, receiver, active_rx, Arc::clone(&auth)));

        Self {
            sender: Mutex::new(Some(sender)),
            active,
            auth,
            worker: tokio::sync::Mutex::new(Some(worker)),
        }
    }

    pub fn is_active(&self) -> bool {
        *self.active.borrow()
    }

    /// Pause or resume dispatch. Requests queued while paused wait for resumption.
    pub fn set_active(&self, active: bool) {
        debug!(active, "Request processor activity changed");
        self.active.send_replace(active);
    }

    pub fn app_key(&self) -> String {
        self.read_auth().app_key().to_string()
    }

    pub fn user_token(&self) -> Option<String> {
        self.read_auth().user_token().map(str::to_string)
    }

    /// Replace the user token used for every subsequent dispatch.
    pub fn set_user_token(&self, token: Option<String>) {
        let mut auth = self.auth.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        auth.set_user_token(token);
    }

    fn read_auth(&self) -> Authorization {
        self.auth
            .read()
            .map(|auth| auth.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Queue a request and wait for its response body.
    pub async fn add_request(&self, request: RestRequest) -> Result<String> {
        let sender = self
            .sender
            .lock()
            .ok()
            .and_then(|sender| sender.as_ref().cloned())
            .ok_or(Error::ProcessorShutDown)?;

        let (respond, response) = oneshot::channel();
        sender
            .send(QueuedRequest { request, respond })
            .await
            .map_err(|_| Error::ProcessorShutDown)?;

        response.await.map_err(|_| Error::ProcessorShutDown)?
    }

    /// Stop accepting requests, drain what is already queued, and wait for the worker.
    pub async fn shut_down(&self) {
        let sender = match self.sender.lock() {
            Ok(mut sender) => sender.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        drop(sender);

        // A paused queue would never drain
        self.active.send_replace(true);

        if let Some(worker) = self.worker.lock().await.take() {
            if let Err(e) = worker.await {
                warn!(error = %e, "Request worker ended abnormally");
            }
        }
    }
}

async fn run_queue(
    api: ApiClient,
    mut receiver: mpsc::Receiver<QueuedRequest>,
    mut active: watch::Receiver<bool>,
    auth: Arc<RwLock<Authorization>>,
) {
    while let Some(QueuedRequest { request, respond }) = receiver.recv().await {
        if active.wait_for(|active| *active).await.is_err() {
            let _ = respond.send(Err(Error::ProcessorShutDown));
            break;
        }

        let current = auth
            .read()
            .map(|auth| auth.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone());

        let result = api.send(request, &current).await.map_err(Error::from);
        if respond.send(result).is_err() {
            debug!("Caller went away before its response arrived");
        }
    }

    debug!("Request queue closed, worker exiting");
}
