use serde::Deserialize;

use super::envelope::{TransportError, decode_envelope};
use crate::domain::{
    Encoding, Envelope, Message, Msisdn, OriginatorType, SendSmsResponse, TtlMinutes,
};

const BODY_FIELD: &str = "BODY";
const ORIGINATOR_FIELD: &str = "ORIGINATOR";

#[derive(Debug, Clone, Deserialize)]
struct SendSmsJson {
    #[serde(default)]
    txguid: String,
    #[serde(default)]
    numbers: u32,
    #[serde(default)]
    smsparts: u32,
    #[serde(default)]
    encoding: String,
    #[serde(default)]
    cost_in_pence: f64,
    #[serde(default)]
    new_balance_in_pence: f64,
}

impl From<SendSmsJson> for SendSmsResponse {
    fn from(value: SendSmsJson) -> Self {
        Self {
            tx_guid: value.txguid,
            numbers: value.numbers,
            sms_parts: value.smsparts,
            encoding: value.encoding,
            cost_in_pence: value.cost_in_pence,
            new_balance_in_pence: value.new_balance_in_pence,
        }
    }
}

/// Form params for `sendsms`, in key order.
pub fn encode_send_sms_form(message: &Message) -> Vec<(String, String)> {
    let options = message.options();
    let mut params = Vec::<(String, String)>::new();

    params.push((BODY_FIELD.to_owned(), message.body().to_owned()));
    if let Some(encoding) = options.encoding {
        params.push((Encoding::FIELD.to_owned(), encoding.as_str().to_owned()));
    }

    let numbers = message
        .numbers()
        .iter()
        .map(Msisdn::as_str)
        .collect::<Vec<_>>()
        .join(Msisdn::SEPARATOR);
    params.push((Msisdn::FIELD.to_owned(), numbers));

    params.push((ORIGINATOR_FIELD.to_owned(), message.originator().to_owned()));
    if let Some(originator_type) = options.originator_type {
        params.push((
            OriginatorType::FIELD.to_owned(),
            originator_type.as_str().to_owned(),
        ));
    }
    if let Some(ttl) = options.time_to_live {
        params.push((TtlMinutes::FIELD.to_owned(), ttl.value().to_string()));
    }

    params
}

pub fn decode_send_sms_json_response(
    json: &str,
) -> Result<Envelope<SendSmsResponse>, TransportError> {
    decode_envelope(json, <SendSmsResponse as From<SendSmsJson>>::from)
}
