use std::collections::BTreeMap;

/// Decoded ZenSend response envelope.
///
/// The API reports outcome by which branch is present, not by HTTP status:
/// a `success` object always wins, then `failure`, otherwise the envelope is
/// empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Success(T),
    Failure(Failure),
    Empty,
}

/// Contents of the `failure` branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failure {
    pub fail_code: Option<String>,
    pub parameter: Option<String>,
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SendSmsResponse {
    pub tx_guid: String,
    pub numbers: u32,
    pub sms_parts: u32,
    pub encoding: String,
    pub cost_in_pence: f64,
    pub new_balance_in_pence: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorLookupResponse {
    /// Mobile country code.
    pub mcc: String,
    /// Mobile network code.
    pub mnc: String,
    pub operator: String,
    pub cost_in_pence: f64,
    pub new_balance_in_pence: f64,
}

/// Price per message in pence, keyed by ISO country code.
pub type Prices = BTreeMap<String, f64>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubAccount {
    pub name: String,
    pub api_key: String,
    pub guid: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateKeywordResponse {
    pub cost_in_pence: Option<f64>,
    pub new_balance_in_pence: Option<f64>,
}
