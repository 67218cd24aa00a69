use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{Envelope, Failure};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct EnvelopeJson<T> {
    success: Option<T>,
    failure: Option<FailureJson>,
}

/// Failure keys are matched in their usual spellings, not just lowercase.
#[derive(Debug, Deserialize)]
struct FailureJson {
    #[serde(default, alias = "failCode", alias = "FailCode", alias = "FAILCODE")]
    failcode: Option<String>,
    #[serde(default, alias = "Parameter", alias = "PARAMETER")]
    parameter: Option<String>,
    #[serde(default, alias = "Cost_In_Pence", alias = "COST_IN_PENCE")]
    cost_in_pence: Option<f64>,
    #[serde(
        default,
        alias = "New_Balance_In_Pence",
        alias = "NEW_BALANCE_IN_PENCE"
    )]
    new_balance_in_pence: Option<f64>,
}

impl From<FailureJson> for Failure {
    fn from(value: FailureJson) -> Self {
        Self {
            fail_code: value.failcode,
            parameter: value.parameter,
            cost_in_pence: value.cost_in_pence,
            new_balance_in_pence: value.new_balance_in_pence,
        }
    }
}

/// Decode a `{"success": ..., "failure": ...}` body.
///
/// A blank body decodes to [`Envelope::Empty`]. The success branch is mapped
/// into its domain type with `into_domain`.
pub(super) fn decode_envelope<J, T>(
    json: &str,
    into_domain: impl FnOnce(J) -> T,
) -> Result<Envelope<T>, TransportError>
where
    J: DeserializeOwned,
{
    if json.trim().is_empty() {
        return Ok(Envelope::Empty);
    }

    let parsed: EnvelopeJson<J> = serde_json::from_str(json)?;
    Ok(match (parsed.success, parsed.failure) {
        (Some(success), _) => Envelope::Success(into_domain(success)),
        (None, Some(failure)) => Envelope::Failure(failure.into()),
        (None, None) => Envelope::Empty,
    })
}
