//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod http;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use url::Url;

use crate::domain::{
    ApiKey, CreateKeyword, CreateKeywordResponse, Envelope, Failure, Message,
    OperatorLookupResponse, Prices, SendSmsResponse, SubAccount, ValidationError,
};
use crate::transport::TransportError;

pub use http::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

const DEFAULT_BASE_URL: &str = "https://api.zensend.io";

const CHECK_BALANCE_PATH: &str = "/v3/checkbalance";
const GET_PRICES_PATH: &str = "/v3/prices";
const OPERATOR_LOOKUP_PATH: &str = "/v3/operator_lookup";
const SEND_SMS_PATH: &str = "/v3/sendsms";
const SUB_ACCOUNTS_PATH: &str = "/v3/sub_accounts";
const KEYWORDS_PATH: &str = "/v3/keywords";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Failure reported by the ZenSend API, or an HTTP response it could not explain.
///
/// `fail_code` and `parameter` are only present when the response carried a
/// `failure` object. Some failures are still billed; `cost_in_pence` and
/// `new_balance_in_pence` report that when the API includes them.
#[error(
    "status {status}, fail code: {}, parameter: {}",
    .fail_code.as_deref().unwrap_or(""),
    .parameter.as_deref().unwrap_or("")
)]
pub struct ApiError {
    pub status: u16,
    pub fail_code: Option<String>,
    pub parameter: Option<String>,
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
}

impl ApiError {
    fn from_status(status: u16) -> Self {
        Self {
            status,
            fail_code: None,
            parameter: None,
            cost_in_pence: None,
            new_balance_in_pence: None,
        }
    }

    fn from_failure(status: u16, failure: Failure) -> Self {
        Self {
            status,
            fail_code: failure.fail_code,
            parameter: failure.parameter,
            cost_in_pence: failure.cost_in_pence,
            new_balance_in_pence: failure.new_balance_in_pence,
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`ZenSendClient`].
pub enum ZenSendError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, bad URL, etc).
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// Response declared JSON but could not be decoded.
    #[error("parse error: {0}")]
    Parse(#[source] BoxError),

    /// ZenSend rejected the request, or answered without a usable envelope.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ZenSendError {
    /// The API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`ZenSendClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or
/// the HTTP transport itself.
pub struct ZenSendClientBuilder {
    api_key: ApiKey,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl std::fmt::Debug for ZenSendClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenSendClientBuilder")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("http_client", &self.http_client)
            .field("transport", &self.transport.as_ref().map(|_| ".."))
            .finish()
    }
}

impl ZenSendClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            http_client: None,
            transport: None,
        }
    }

    /// Override the API base URL (scheme, host and optional path prefix).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use an existing [`reqwest::Client`]. `timeout` and `user_agent` are then ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Use a custom transport instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`ZenSendClient`].
    pub fn build(self) -> Result<ZenSendClient, ZenSendError> {
        let base_url = self.base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(|err| ZenSendError::Transport(Box::new(err)))?;

        let http: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(client)) => Arc::new(ReqwestTransport::new(client)),
            (None, None) => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| ZenSendError::Transport(Box::new(err)))?;
                Arc::new(ReqwestTransport::new(client))
            }
        };

        Ok(ZenSendClient {
            api_key: self.api_key,
            base_url,
            http,
        })
    }
}

#[derive(Clone)]
/// High-level ZenSend client.
///
/// Each call is a single request: lookups are sent as `GET` with query
/// parameters, mutations as form-encoded `POST`. Success is decided by the
/// presence of the `success` branch in the JSON envelope, not by the HTTP
/// status. No retries are performed.
pub struct ZenSendClient {
    api_key: ApiKey,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ZenSendClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenSendClient")
            .field("api_key", &self.api_key)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ZenSendClient {
    /// Create a client using `https://api.zensend.io`.
    ///
    /// For more customization, use [`ZenSendClient::builder`].
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport::new(reqwest::Client::new())),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(api_key: ApiKey) -> ZenSendClientBuilder {
        ZenSendClientBuilder::new(api_key)
    }

    /// Current account balance in pence.
    pub async fn check_balance(&self) -> Result<f64, ZenSendError> {
        let response = self.execute(CHECK_BALANCE_PATH, &[], None).await?;
        resolve(response, crate::transport::decode_check_balance_json_response)
    }

    /// Price per message in pence, keyed by country code.
    pub async fn get_prices(&self) -> Result<Prices, ZenSendError> {
        let response = self.execute(GET_PRICES_PATH, &[], None).await?;
        resolve(response, crate::transport::decode_get_prices_json_response)
    }

    /// Look up the network operator of `number`.
    ///
    /// Errors:
    /// - [`ZenSendError::Api`] may still carry `cost_in_pence` /
    ///   `new_balance_in_pence`, since failed lookups can be charged.
    pub async fn lookup_operator(
        &self,
        number: &str,
    ) -> Result<OperatorLookupResponse, ZenSendError> {
        let query = crate::transport::encode_operator_lookup_query(number);
        let response = self.execute(OPERATOR_LOOKUP_PATH, &query, None).await?;
        resolve(
            response,
            crate::transport::decode_operator_lookup_json_response,
        )
    }

    /// Send an SMS.
    ///
    /// Errors:
    /// - [`ZenSendError::Transport`] when the request never got an HTTP answer,
    /// - [`ZenSendError::Parse`] for malformed JSON,
    /// - [`ZenSendError::Api`] for API failures and non-JSON responses.
    pub async fn send_sms(&self, message: &Message) -> Result<SendSmsResponse, ZenSendError> {
        let form = crate::transport::encode_send_sms_form(message);
        let response = self.execute(SEND_SMS_PATH, &[], Some(form)).await?;
        resolve(response, crate::transport::decode_send_sms_json_response)
    }

    /// Create a sub-account named `name`.
    pub async fn create_sub_account(&self, name: &str) -> Result<SubAccount, ZenSendError> {
        let form = crate::transport::encode_create_sub_account_form(name);
        let response = self.execute(SUB_ACCOUNTS_PATH, &[], Some(form)).await?;
        resolve(
            response,
            crate::transport::decode_create_sub_account_json_response,
        )
    }

    /// Register a keyword on a shortcode.
    pub async fn create_keyword(
        &self,
        request: &CreateKeyword,
    ) -> Result<CreateKeywordResponse, ZenSendError> {
        let form = crate::transport::encode_create_keyword_form(request);
        let response = self.execute(KEYWORDS_PATH, &[], Some(form)).await?;
        resolve(response, crate::transport::decode_create_keyword_json_response)
    }

    async fn execute(
        &self,
        path: &str,
        query: &[(String, String)],
        form: Option<Vec<(String, String)>>,
    ) -> Result<HttpResponse, ZenSendError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|err| ZenSendError::Transport(Box::new(err)))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        let request = HttpRequest {
            url,
            api_key: self.api_key.clone(),
            form,
        };
        debug!("zensend request: {} {}", request.method(), request.url);

        let response = self
            .http
            .send(request)
            .await
            .map_err(ZenSendError::Transport)?;
        debug!(
            "zensend response: HTTP {} ({})",
            response.status,
            response.content_type.as_deref().unwrap_or("no content type")
        );
        Ok(response)
    }
}

fn resolve<T>(
    response: HttpResponse,
    decode: impl FnOnce(&str) -> Result<Envelope<T>, TransportError>,
) -> Result<T, ZenSendError> {
    if !response.is_json() {
        return Err(ApiError::from_status(response.status).into());
    }

    let envelope = decode(&response.body).map_err(|err| {
        warn!(
            "zensend response with HTTP {} could not be decoded: {err}",
            response.status
        );
        ZenSendError::Parse(Box::new(err))
    })?;

    match envelope {
        Envelope::Success(value) => Ok(value),
        Envelope::Failure(failure) => Err(ApiError::from_failure(response.status, failure).into()),
        Envelope::Empty => Err(ApiError::from_status(response.status).into()),
    }
}
