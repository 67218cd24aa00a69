//! HTTP seam of the client: a small object-safe transport trait and its
//! `reqwest` implementation.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::domain::ApiKey;

pub type BoxError = Box<dyn StdError + Send + Sync>;
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const JSON_CONTENT_TYPE: &str = "application/json";

/// One call to the ZenSend API.
///
/// Sent as `GET` when `form` is `None`, otherwise as a form-encoded `POST`.
/// Every request carries the API key in the [`ApiKey::HEADER`] header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: Url,
    pub api_key: ApiKey,
    pub form: Option<Vec<(String, String)>>,
}

impl HttpRequest {
    pub fn method(&self) -> &'static str {
        if self.form.is_some() { "POST" } else { "GET" }
    }
}

/// Raw response: status, declared content type and the full body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the server declared a JSON body.
    pub fn is_json(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|it| it.contains(JSON_CONTENT_TYPE))
    }
}

/// Executes [`HttpRequest`]s. Implement this to substitute the network in tests
/// or to route calls through your own HTTP stack.
pub trait HttpTransport: Send + Sync {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>>;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn send<'a>(&'a self, request: HttpRequest) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let builder = match request.form {
                Some(params) => self.client.post(request.url).form(&params),
                None => self.client.get(request.url),
            };

            let response = builder
                .header(ApiKey::HEADER, request.api_key.as_str())
                .send()
                .await?;
            let status = response.status().as_u16();
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.text().await?;

            Ok(HttpResponse {
                status,
                content_type,
                body,
            })
        })
    }
}
