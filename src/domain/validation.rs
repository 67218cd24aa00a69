use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidNumber { input: String },
    TtlOutOfRange { min: u32, actual: u32 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidNumber { input } => write!(f, "invalid character in number: {input}"),
            Self::TtlOutOfRange { min, actual } => {
                write!(f, "time to live out of range: {actual} (expected >= {min})")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
