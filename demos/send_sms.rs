use std::io;

use zensend::{ApiKey, Message, MessageOptions, OriginatorType, ZenSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;
    let numbers = std::env::var("ZENSEND_NUMBERS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_NUMBERS environment variable is required (comma separated)",
        )
    })?;
    let body = std::env::var("ZENSEND_MESSAGE")
        .unwrap_or_else(|_| "Hello from the zensend example.".to_owned());
    let originator = std::env::var("ZENSEND_ORIGINATOR").unwrap_or_else(|_| "ZenSend".to_owned());

    let mut builder = ZenSendClient::builder(ApiKey::new(api_key)?);
    if let Ok(base_url) = std::env::var("ZENSEND_BASE_URL") {
        builder = builder.base_url(base_url);
    }
    let client = builder.build()?;

    let options = MessageOptions {
        originator_type: Some(OriginatorType::Alpha),
        ..Default::default()
    };
    let message = Message::with_options(body, originator, numbers.split(','), options)?;

    let response = client.send_sms(&message).await?;
    println!(
        "txguid: {}, numbers: {}, parts: {}, encoding: {}, cost: {}p, balance: {}p",
        response.tx_guid,
        response.numbers,
        response.sms_parts,
        response.encoding,
        response.cost_in_pence,
        response.new_balance_in_pence
    );

    Ok(())
}
