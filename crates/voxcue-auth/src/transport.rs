use thiserror::Error;

/// Status and raw body of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, undecoded.
    pub body: String,
}

impl TransportResponse {
    #[allow(missing_docs)]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("Response body is not valid JSON: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("Transport failure: {0}")]
    Custom(String),
}

/// This trait defines the interface used to reach the authentication service. It is up to the
/// platform to provide an implementation; [`ReqwestTransport`] covers native and browser
/// targets.
///
/// A single call maps to exactly one request. Implementations must not retry.
pub trait HttpTransport {
    /// POST `body` as `application/json` to `url` and resolve with the response, whatever its
    /// status. Only failures to obtain a response are errors.
    fn post_json(
        &self,
        url: &str,
        body: String,
    ) -> impl std::future::Future<Output = Result<TransportResponse, TransportError>>;
}

/// [`HttpTransport`] backed by a [`reqwest::Client`]. On `wasm32` this issues `fetch` calls.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Wraps an existing client, keeping its connection pool and defaults.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<TransportResponse, TransportError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}
