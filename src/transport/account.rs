use std::collections::BTreeMap;

use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use crate::domain::{Envelope, Prices, SubAccount};

const NAME_FIELD: &str = "NAME";

#[derive(Debug, Clone, Deserialize)]
struct BalanceJson {
    #[serde(default)]
    balance: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct PricesJson {
    #[serde(default)]
    prices_in_pence: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct SubAccountJson {
    #[serde(default)]
    name: String,
    #[serde(default)]
    api_key: String,
    #[serde(default)]
    guid: String,
}

impl From<SubAccountJson> for SubAccount {
    fn from(value: SubAccountJson) -> Self {
        Self {
            name: value.name,
            api_key: value.api_key,
            guid: value.guid,
        }
    }
}

pub fn decode_check_balance_json_response(json: &str) -> Result<Envelope<f64>, TransportError> {
    decode_envelope(json, |it: BalanceJson| it.balance)
}

pub fn decode_get_prices_json_response(json: &str) -> Result<Envelope<Prices>, TransportError> {
    decode_envelope(json, |it: PricesJson| it.prices_in_pence)
}

/// Form params for `sub_accounts`.
pub fn encode_create_sub_account_form(name: &str) -> Vec<(String, String)> {
    vec![(NAME_FIELD.to_owned(), name.to_owned())]
}

pub fn decode_create_sub_account_json_response(
    json: &str,
) -> Result<Envelope<SubAccount>, TransportError> {
    decode_envelope(json, <SubAccount as From<SubAccountJson>>::from)
}
