use tracing::{debug, info};

use crate::error::Error;
use crate::service::allocator;
use crate::service::rate::RateProvider;

pub fn usage() -> String {
    format!(
        "Usage: {app} <amount>\nExample: {app} 1623.56",
        app = crate::APP_NAME,
    )
}

pub fn parse_amount(arg: Option<&str>) -> Result<f64, Error> {
    let arg = arg.ok_or(Error::MissingAmount)?;

    let amount = arg.trim().parse::<f64>()
        .map_err(|_| Error::InvalidAmount(arg.to_string()))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::NonPositiveAmount(amount));
    }

    Ok(amount)
}

/// Fetches rates for an already validated amount and encodes its allocation.
pub async fn allocate<P: RateProvider>(amount: f64, provider: &P) -> Result<String, Error> {
    info!("allocating amount={amount} usd");

    let rates = provider.get_usd_rates().await?;
    debug!("got {} rates for base currency={}", rates.rates.len(), rates.currency);

    let res = allocator::compute_allocation(amount, &rates)?;

    serde_json::to_string(&res).map_err(Error::Encode)
}
