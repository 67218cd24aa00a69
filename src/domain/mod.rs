//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{CreateKeyword, Message, MessageOptions};
pub use response::{
    CreateKeywordResponse, Envelope, Failure, OperatorLookupResponse, Prices, SendSmsResponse,
    SubAccount,
};
pub use validation::ValidationError;
pub use value::{ApiKey, Encoding, Msisdn, OriginatorType, TtlMinutes};
