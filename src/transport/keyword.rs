use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use crate::domain::{CreateKeyword, CreateKeywordResponse, Envelope};

const IS_STICKY_FIELD: &str = "IS_STICKY";
const KEYWORD_FIELD: &str = "KEYWORD";
const MO_URL_FIELD: &str = "MOURL";
const SHORTCODE_FIELD: &str = "SHORTCODE";

#[derive(Debug, Clone, Deserialize)]
struct CreateKeywordJson {
    #[serde(default)]
    cost_in_pence: Option<f64>,
    #[serde(default)]
    new_balance_in_pence: Option<f64>,
}

impl From<CreateKeywordJson> for CreateKeywordResponse {
    fn from(value: CreateKeywordJson) -> Self {
        Self {
            cost_in_pence: value.cost_in_pence,
            new_balance_in_pence: value.new_balance_in_pence,
        }
    }
}

/// Form params for `keywords`, in key order. `IS_STICKY` is always sent.
pub fn encode_create_keyword_form(request: &CreateKeyword) -> Vec<(String, String)> {
    let mut params = vec![
        (IS_STICKY_FIELD.to_owned(), request.is_sticky().to_string()),
        (KEYWORD_FIELD.to_owned(), request.keyword().to_owned()),
    ];
    if let Some(mo_url) = request.mo_url() {
        params.push((MO_URL_FIELD.to_owned(), mo_url.to_owned()));
    }
    params.push((SHORTCODE_FIELD.to_owned(), request.shortcode().to_owned()));
    params
}

pub fn decode_create_keyword_json_response(
    json: &str,
) -> Result<Envelope<CreateKeywordResponse>, TransportError> {
    decode_envelope(
        json,
        <CreateKeywordResponse as From<CreateKeywordJson>>::from,
    )
}
