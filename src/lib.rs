//! Typed Rust client for the ZenSend SMS HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer
//! for wire-format quirks (uppercase form fields, the `success`/`failure`
//! JSON envelope), and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use zensend::{ApiKey, Message, ZenSendClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), zensend::ZenSendError> {
//!     let client = ZenSendClient::new(ApiKey::new("...")?);
//!     let message = Message::new("hello", "ZenSend", ["447777777777"])?;
//!     let response = client.send_sms(&message).await?;
//!     println!("sent {} parts", response.sms_parts);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    ApiError, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, ZenSendClient,
    ZenSendClientBuilder, ZenSendError,
};
pub use domain::{
    ApiKey, CreateKeyword, CreateKeywordResponse, Encoding, Envelope, Failure, Message,
    MessageOptions, Msisdn, OperatorLookupResponse, OriginatorType, Prices, SendSmsResponse,
    SubAccount, TtlMinutes, ValidationError,
};
