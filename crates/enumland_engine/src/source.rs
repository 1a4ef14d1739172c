use std::time::Duration;

use enumland_logging::{enumland_debug, enumland_info, enumland_warn};
use reqwest::Url;
use serde::Deserialize;

use crate::{FailureKind, QueryError};

/// Path of the lookup endpoint, relative to the base url.
pub const DOMAIN_PATH: &str = "api/domain";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    pub base_url: String,
    pub user_agent: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            user_agent: concat!("enumland/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait DomainSource: Send + Sync {
    /// Look up the subdomains of `query`, sorted ascending.
    async fn get_domains(&self, query: &str) -> Result<Vec<String>, QueryError>;
}

/// Resolve the lookup endpoint against `base_url`.
///
/// A base url with a path prefix keeps it: `http://host/enum` resolves to
/// `http://host/enum/api/domain`.
pub fn endpoint_url(base_url: &str) -> Result<Url, QueryError> {
    let mut base = Url::parse(base_url)
        .map_err(|err| QueryError::new(FailureKind::InvalidBaseUrl, err.to_string()))?;
    if base.cannot_be_a_base() {
        return Err(QueryError::new(
            FailureKind::InvalidBaseUrl,
            format!("{base_url} cannot be used as a base url"),
        ));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(DOMAIN_PATH)
        .map_err(|err| QueryError::new(FailureKind::InvalidBaseUrl, err.to_string()))
}

#[derive(Debug, Clone)]
pub struct ReqwestDomainSource {
    client: reqwest::Client,
    endpoint: Url,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: String,
}

impl ReqwestDomainSource {
    pub fn new(settings: &EngineSettings) -> Result<Self, QueryError> {
        let endpoint = endpoint_url(&settings.base_url)?;

        let mut builder = reqwest::Client::builder().user_agent(settings.user_agent.as_str());
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| QueryError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, endpoint })
    }

    fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("q", query);
        url
    }
}

#[async_trait::async_trait]
impl DomainSource for ReqwestDomainSource {
    async fn get_domains(&self, query: &str) -> Result<Vec<String>, QueryError> {
        let url = self.request_url(query);
        enumland_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let mut message = format!("Request failed with status code {}", status.as_u16());
            if let Ok(envelope) = serde_json::from_slice::<ErrorEnvelope>(&body) {
                message.push_str(": ");
                message.push_str(&envelope.error);
            }
            enumland_warn!("lookup for {:?} failed: {}", query, message);
            return Err(QueryError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let mut domains: Vec<String> = serde_json::from_slice(&body).map_err(|err| {
            QueryError::new(
                FailureKind::MalformedBody,
                format!("malformed response: {err}"),
            )
        })?;
        domains.sort();

        enumland_info!("lookup for {:?} returned {} rows", query, domains.len());
        Ok(domains)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> QueryError {
    if err.is_timeout() {
        return QueryError::new(FailureKind::Timeout, err.to_string());
    }
    QueryError::new(FailureKind::Network, err.to_string())
}
