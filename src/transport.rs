use crate::error::TransportError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use url::Url;

/// Raw outcome of a transport fetch, before any protocol interpretation.
///
/// `status` is `None` for transports without a status concept (files).
/// `body` is `None` when the transport completed without a payload.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: Option<u16>,
    pub body: Option<Bytes>,
}

/// Abstraction over fetching manifest bytes from a location.
///
/// Implementations report what happened and leave the judgement (status
/// ranges, empty bodies) to the loader.
#[async_trait]
pub trait ManifestTransport: Send + Sync {
    /// Fetch the raw bytes behind `url`.
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

/// Builder for [`HttpTransport`].
#[derive(Default)]
pub struct HttpTransportBuilder {
    client: Option<Client>,
}

impl HttpTransportBuilder {
    /// Provide a custom reqwest client instance.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Build the transport.
    pub fn build(self) -> HttpTransport {
        HttpTransport {
            client: self.client.unwrap_or_default(),
        }
    }
}

/// HTTP(S) transport backed by reqwest.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create a transport with a default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder.
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::default()
    }
}

#[async_trait]
impl ManifestTransport for HttpTransport {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        Ok(TransportResponse {
            status: Some(status),
            body: Some(body),
        })
    }
}

/// Transport that reads a manifest from a local `file://` URL.
///
/// File reads carry no status code; failures surface as connection errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTransport;

impl FileTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ManifestTransport for FileTransport {
    async fn fetch(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        let path = url
            .to_file_path()
            .map_err(|_| format!("not a file URL: {url}"))?;
        let bytes = tokio::fs::read(&path).await?;
        Ok(TransportResponse {
            status: None,
            body: Some(Bytes::from(bytes)),
        })
    }
}
