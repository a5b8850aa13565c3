use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use reqwest::{Method, RequestBuilder, Response, StatusCode};

use crate::error::WgcfError;

/// User agent of the official Android client, which the provisioning service expects.
const USER_AGENT: &str = "okhttp/3.12.1";

/// Client version header of the official Android client.
const CLIENT_VERSION: &str = "a-6.3-1922";

/// HTTP transport for the registration API. Sets the client headers the service
/// expects and a timeout, and retries transient failures with exponential backoff.
///
/// Every call made through it (reads, and the name update, which sets an absolute
/// value) is idempotent, so a retried attempt never applies a change twice.
pub struct Request {
    client: reqwest::Client,
    timeout: Duration,
    max_retries: usize,
}

impl Request {
    /// Initializes a new `Request` instance.
    pub(crate) fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            timeout: Duration::from_secs(10),
            max_retries: 3, // total attempts = 4
        }
    }

    /// Creates a request builder with the client headers applied.
    pub(crate) fn req(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .timeout(self.timeout)
            .header("User-Agent", USER_AGENT)
            .header("CF-Client-Version", CLIENT_VERSION)
    }

    /// Creates a GET request builder.
    pub(crate) fn get(&self, url: &str) -> RequestBuilder {
        self.req(Method::GET, url)
    }

    /// Creates a PATCH request builder.
    pub(crate) fn patch(&self, url: &str) -> RequestBuilder {
        self.req(Method::PATCH, url)
    }

    /// Sends the request, retrying transient failures, and returns the successful response.
    ///
    /// Any non-success status ends as [`WgcfError::NetworkError`] carrying the status
    /// and the response body.
    pub(crate) async fn send(
        &self,
        request_builder: RequestBuilder,
    ) -> Result<Response, WgcfError> {
        let backoff = ExponentialBuilder::default()
            .with_min_delay(Duration::from_millis(200))
            .with_max_delay(Duration::from_secs(2))
            .with_max_times(self.max_retries);

        (|| async {
            let attempt = request_builder.try_clone().ok_or_else(|| {
                Attempt::Fatal(WgcfError::InvalidInput {
                    attribute: "request".to_string(),
                    reason: "streaming bodies cannot be sent".to_string(),
                })
            })?;
            send_once(attempt).await
        })
        .retry(backoff)
        .when(Attempt::is_transient)
        .notify(|attempt: &Attempt, delay: Duration| {
            tracing::warn!(error = %attempt.error(), ?delay, "retrying request");
        })
        .await
        .map_err(Attempt::into_error)
    }
}

/// A failed attempt. Only transient failures are retried.
#[derive(Debug)]
enum Attempt {
    /// Timeout, connect failure, rate limiting or a server error.
    Transient(WgcfError),
    Fatal(WgcfError),
}

impl Attempt {
    const fn is_transient(&self) -> bool {
        matches!(self, Self::Transient(_))
    }

    const fn error(&self) -> &WgcfError {
        match self {
            Self::Transient(error) | Self::Fatal(error) => error,
        }
    }

    fn into_error(self) -> WgcfError {
        match self {
            Self::Transient(error) | Self::Fatal(error) => error,
        }
    }
}

async fn send_once(request_builder: RequestBuilder) -> Result<Response, Attempt> {
    let (client, request) = request_builder.build_split();
    let request = request.map_err(|err| {
        Attempt::Fatal(WgcfError::InvalidInput {
            attribute: "request".to_string(),
            reason: err.to_string(),
        })
    })?;
    let url = request.url().to_string();
    tracing::debug!(method = %request.method(), %url, "sending request");

    let response = client.execute(request).await.map_err(|err| {
        let error = WgcfError::NetworkError {
            url: url.clone(),
            status: None,
            error: err.to_string(),
        };
        if err.is_timeout() || err.is_connect() {
            Attempt::Transient(error)
        } else {
            Attempt::Fatal(error)
        }
    })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let error = WgcfError::NetworkError {
        url,
        status: Some(status.as_u16()),
        error: format!("request rejected: {body}"),
    };
    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        Err(Attempt::Transient(error))
    } else {
        Err(Attempt::Fatal(error))
    }
}
