use std::io;

use zensend::{ApiKey, CreateKeyword, ZenSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;
    let shortcode = std::env::var("ZENSEND_SHORTCODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_SHORTCODE environment variable is required",
        )
    })?;
    let keyword = std::env::var("ZENSEND_KEYWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_KEYWORD environment variable is required",
        )
    })?;

    let client = ZenSendClient::new(ApiKey::new(api_key)?);

    let mut request = CreateKeyword::new(shortcode, keyword);
    if let Ok(mo_url) = std::env::var("ZENSEND_MO_URL") {
        request = request.with_mo_url(mo_url);
    }

    let response = client.create_keyword(&request).await?;
    println!(
        "cost: {:?}, balance: {:?}",
        response.cost_in_pence, response.new_balance_in_pence
    );

    Ok(())
}
