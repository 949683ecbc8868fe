use super::Endpoint;

/// File content sent as a multipart upload.
#[derive(Debug, Clone)]
pub struct RestFile {
    pub content: Vec<u8>,
    pub file_name: String,
}

impl RestFile {
    /// Multipart field name Trello expects for uploads
    pub const PARAMETER_KEY: &'static str = "file";
}

/// A request waiting in the processor queue.
#[derive(Debug, Clone)]
pub struct RestRequest {
    pub endpoint: Endpoint,
    pub file: Option<RestFile>,
}

impl RestRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint, file: None }
    }

    pub fn with_file(mut self, content: Vec<u8>, file_name: impl Into<String>) -> Self {
        self.file = Some(RestFile {
            content,
            file_name: file_name.into(),
        });
        self
    }
}

impl From<Endpoint> for RestRequest {
    fn from(endpoint: Endpoint) -> Self {
        Self::new(endpoint)
    }
}
