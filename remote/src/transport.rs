use auth::BearerToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    fn as_reqwest(&self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One authenticated call to the remote API.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub token: Option<BearerToken>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            token: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn bearer(mut self, token: BearerToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Attach a token when one is available; signed-out reads go out bare.
    pub fn maybe_bearer(mut self, token: Option<BearerToken>) -> Self {
        self.token = token;
        self
    }
}

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("http request failed :: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot decode response body :: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("remote api returned status {0}")]
    Status(u16),
}

/// Seam between the access layer and the wire. The production implementation
/// is [`HttpTransport`]; tests substitute an in-memory fake so that call
/// counts and payloads are observable.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<serde_json::Value, TransportError>> + Send;
}

/// `reqwest`-backed transport against a fixed base url.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    #[tracing::instrument(fields(method = ?request.method, path = %request.path), skip_all)]
    async fn execute(&self, request: ApiRequest) -> Result<serde_json::Value, TransportError> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), self.url(&request.path));

        if let Some(token) = &request.token {
            builder = builder.header(reqwest::header::AUTHORIZATION, token.authorization());
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        // The API reports business failures inside the envelope, usually with
        // a matching http status. Hand any json body back to the caller; only
        // a body-less non-2xx becomes a status error.
        let body = response.text().await?;
        match body.trim().is_empty() {
            false => Ok(serde_json::from_str(&body)?),
            true if status.is_success() => Ok(serde_json::Value::Null),
            true => {
                tracing::warn!(%status, "empty non-success response");
                Err(TransportError::Status(status.as_u16()))
            }
        }
    }
}
