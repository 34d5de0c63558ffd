//! Blocking client for the audit-trail endpoint.
//!
//! One call, one request: no retries, no pagination, and no timeout beyond
//! the HTTP client's default.

use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, Result};
use crate::model::ResponseEnvelope;

/// Terraform Cloud organization audit-trail endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://app.terraform.io/api/v2/organization/audit-trail";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full audit-trail URL.
    pub endpoint: String,
    /// Value for the `User-Agent` header.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("tfaudit/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Authenticated audit-trail client.
pub struct AuditTrailClient {
    http: HttpClient,
    endpoint: Url,
    token: String,
}

impl AuditTrailClient {
    /// Creates a client for `token`.
    ///
    /// Fails if the token is empty or the endpoint does not parse.
    pub fn new(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(FetchError::MissingToken);
        }

        let endpoint = Url::parse(&config.endpoint).map_err(|source| {
            FetchError::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            }
        })?;

        let http = HttpClient::builder()
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token,
        })
    }

    /// Builds the request URL, setting `since` and keeping any other query
    /// parameters already on the endpoint.
    pub fn request_url(&self, since: &str) -> Url {
        let mut url = self.endpoint.clone();
        let retained: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(key, _)| key != "since")
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(retained)
            .append_pair("since", since);
        url
    }

    /// Fetches every event recorded since `since` (RFC 3339).
    ///
    /// Only a 200 response is accepted. The body is read in full before
    /// decoding; on every path the response is dropped before returning.
    pub fn fetch(&self, since: &str) -> Result<ResponseEnvelope> {
        let url = self.request_url(since);
        debug!(endpoint = %self.endpoint, since, "fetching audit events");

        let response = self.http.get(url).bearer_auth(&self.token).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "audit trail request rejected");
            return Err(FetchError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes()?;
        let envelope: ResponseEnvelope = serde_json::from_slice(&body)?;

        debug!(events = envelope.data.len(), "decoded audit events");
        Ok(envelope)
    }
}

/// Fetches events since `since` from the default endpoint.
pub fn fetch(token: &str, since: &str) -> Result<ResponseEnvelope> {
    AuditTrailClient::new(token, ClientConfig::default())?.fetch(since)
}
