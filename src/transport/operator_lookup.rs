use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use crate::domain::{Envelope, OperatorLookupResponse};

const NUMBER_FIELD: &str = "NUMBER";

#[derive(Debug, Clone, Deserialize)]
struct OperatorLookupJson {
    #[serde(default)]
    mcc: String,
    #[serde(default)]
    mnc: String,
    #[serde(default)]
    operator: String,
    #[serde(default)]
    cost_in_pence: f64,
    #[serde(default)]
    new_balance_in_pence: f64,
}

impl From<OperatorLookupJson> for OperatorLookupResponse {
    fn from(value: OperatorLookupJson) -> Self {
        Self {
            mcc: value.mcc,
            mnc: value.mnc,
            operator: value.operator,
            cost_in_pence: value.cost_in_pence,
            new_balance_in_pence: value.new_balance_in_pence,
        }
    }
}

/// Query params for `operator_lookup`.
pub fn encode_operator_lookup_query(number: &str) -> Vec<(String, String)> {
    vec![(NUMBER_FIELD.to_owned(), number.to_owned())]
}

pub fn decode_operator_lookup_json_response(
    json: &str,
) -> Result<Envelope<OperatorLookupResponse>, TransportError> {
    decode_envelope(
        json,
        <OperatorLookupResponse as From<OperatorLookupJson>>::from,
    )
}
