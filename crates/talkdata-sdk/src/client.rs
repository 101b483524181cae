use reqwest::blocking::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use talkdata_types::{ErrorBody, HealthStatus, QueryRequest, QueryResponse, TableList};

use crate::endpoint::ApiBase;
use crate::{Error, Result};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can answer a natural-language question.
///
/// The interactive client runs this on a worker thread, hence `Send + Sync`.
pub trait QueryBackend: Send + Sync {
    fn query(&self, request: &QueryRequest) -> Result<QueryResponse>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: ApiBase,
    /// Whole-request timeout; `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(api_base: ApiBase) -> Self {
        Self {
            api_base,
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking HTTP client for the query backend.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    api_base: ApiBase,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .user_agent(concat!("talkdata/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base: config.api_base,
        })
    }

    pub fn api_base(&self) -> &ApiBase {
        &self.api_base
    }

    /// `POST {api_base}/query`
    pub fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        let url = self.api_base.endpoint("query");
        tracing::debug!(%url, question = %request.question, "sending query");

        let response = self.http.post(&url).json(request).send()?;
        let response: QueryResponse = decode(response)?;

        tracing::debug!(
            rows = response.results.len(),
            row_count = response.row_count(),
            chart = response.chart_data.as_ref().map(|c| c.kind()).unwrap_or("none"),
            "query answered"
        );
        Ok(response)
    }

    pub fn ask(&self, question: &str) -> Result<QueryResponse> {
        self.query(&QueryRequest::new(question))
    }

    /// `GET {api_base}/health`
    pub fn health(&self) -> Result<HealthStatus> {
        self.get("health")
    }

    /// `GET {api_base}/tables`
    pub fn tables(&self) -> Result<TableList> {
        self.get("tables")
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.api_base.endpoint(path);
        tracing::debug!(%url, "GET");
        decode(self.http.get(&url).send()?)
    }
}

impl QueryBackend for Client {
    fn query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        Client::query(self, request)
    }
}

fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        // Body may be empty, HTML from a proxy, or JSON without `error`.
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.error);
        tracing::warn!(status = status.as_u16(), message = ?message, "backend returned error");
        return Err(Error::Http {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|err| {
        tracing::warn!(error = %err, "could not decode backend response");
        Error::Decode(err)
    })
}
