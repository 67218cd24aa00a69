use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// ZenSend API key, sent with every request in the `X-API-KEY` header.
///
/// Invariant: not blank. The value is stored and sent exactly as given.
pub struct ApiKey(String);

impl ApiKey {
    /// Header name used by ZenSend (`X-API-KEY`).
    pub const HEADER: &'static str = "X-API-KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: Self::HEADER,
            });
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(..)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Recipient phone number as sent to ZenSend.
///
/// Invariant: contains no `,` (the separator of the `NUMBERS` field). No other
/// format checks are performed; the API reports malformed numbers itself.
pub struct Msisdn(String);

impl Msisdn {
    /// Form field name used by ZenSend for the recipient list (`NUMBERS`).
    pub const FIELD: &'static str = "NUMBERS";

    /// Separator between numbers in the `NUMBERS` field.
    pub const SEPARATOR: &'static str = ",";

    /// Create a number, rejecting values that contain the list separator.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.contains(Self::SEPARATOR) {
            return Err(ValidationError::InvalidNumber { input: value });
        }
        Ok(Self(value))
    }

    /// Number as sent on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Validity period of a message in minutes (`TIMETOLIVE`).
///
/// Invariant: `>= 1`. Leave the option unset to use the account default.
pub struct TtlMinutes(u32);

impl TtlMinutes {
    /// Form field name used by ZenSend (`TIMETOLIVE`).
    pub const FIELD: &'static str = "TIMETOLIVE";

    /// Minimum allowed value.
    pub const MIN: u32 = 1;

    /// Create a validated TTL value.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        if value < Self::MIN {
            return Err(ValidationError::TtlOutOfRange {
                min: Self::MIN,
                actual: value,
            });
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// How the originator should be interpreted (`ORIGINATOR_TYPE`).
pub enum OriginatorType {
    /// Alphanumeric sender name.
    Alpha,
    /// Phone number of the sender.
    Msisdn,
}

impl OriginatorType {
    /// Form field name used by ZenSend (`ORIGINATOR_TYPE`).
    pub const FIELD: &'static str = "ORIGINATOR_TYPE";

    /// Wire value of this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Msisdn => "msisdn",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Character encoding of the message body (`ENCODING`).
pub enum Encoding {
    /// GSM 03.38 7-bit alphabet.
    Gsm,
    /// UCS-2 (16-bit) encoding.
    Ucs2,
}

impl Encoding {
    /// Form field name used by ZenSend (`ENCODING`).
    pub const FIELD: &'static str = "ENCODING";

    /// Wire value of this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gsm => "gsm",
            Self::Ucs2 => "ucs2",
        }
    }
}
