//! Transport layer: wire-format details (form/query encoding, JSON envelope decoding).

mod account;
mod envelope;
mod keyword;
mod operator_lookup;
mod send_sms;

pub use account::{
    decode_check_balance_json_response, decode_create_sub_account_json_response,
    decode_get_prices_json_response, encode_create_sub_account_form,
};
pub use envelope::TransportError;
pub use keyword::{decode_create_keyword_json_response, encode_create_keyword_form};
pub use operator_lookup::{decode_operator_lookup_json_response, encode_operator_lookup_query};
pub use send_sms::{decode_send_sms_json_response, encode_send_sms_form};
