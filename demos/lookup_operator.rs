use std::io;

use zensend::{ApiKey, ZenSendClient, ZenSendError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("ZENSEND_API_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_API_KEY environment variable is required",
        )
    })?;
    let number = std::env::var("ZENSEND_NUMBER").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "ZENSEND_NUMBER environment variable is required",
        )
    })?;

    let client = ZenSendClient::new(ApiKey::new(api_key)?);

    match client.lookup_operator(&number).await {
        Ok(response) => println!(
            "mcc: {}, mnc: {}, operator: {}, cost: {}p, balance: {}p",
            response.mcc,
            response.mnc,
            response.operator,
            response.cost_in_pence,
            response.new_balance_in_pence
        ),
        // Failed lookups can still be charged.
        Err(ZenSendError::Api(err)) => println!(
            "lookup failed: {err}; cost: {:?}, balance: {:?}",
            err.cost_in_pence, err.new_balance_in_pence
        ),
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
