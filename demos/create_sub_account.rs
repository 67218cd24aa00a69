use std::io;

use zensend::{ApiKey, ZenSendClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;
    let name = std::env::var("ZENSEND_SUB_ACCOUNT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_SUB_ACCOUNT environment variable is required",
        )
    })?;

    let client = ZenSendClient::new(ApiKey::new(api_key)?);
    let account = client.create_sub_account(&name).await?;
    println!("name: {}, guid: {}", account.name, account.guid);

    Ok(())
}
