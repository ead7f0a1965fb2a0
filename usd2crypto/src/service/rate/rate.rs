use std::collections::HashMap;

use crate::error::Error;

/// Rates as reported by the provider: units of each currency per 1 unit of `currency`.
#[derive(Debug, Clone)]
pub struct RateSnapshot {
    pub currency: String,
    pub rates: HashMap<String, String>,
}

impl RateSnapshot {
    pub fn new(currency: String, rates: HashMap<String, String>) -> Self {
        Self { currency, rates }
    }

    pub fn rate(&self, code: &str) -> Result<f64, Error> {
        let invalid = |reason: String| Error::InvalidRate {
            code: code.to_string(),
            reason,
        };

        let raw = self.rates.get(code)
            .ok_or_else(|| invalid("missing from response".into()))?;

        let rate = raw.trim().parse::<f64>()
            .map_err(|err| invalid(format!("unable to parse '{raw}': {err}")))?;

        if !rate.is_finite() || rate <= 0.0 {
            return Err(invalid(format!("expected a positive number, got '{raw}'")));
        }

        Ok(rate)
    }
}

pub trait RateProvider {
    async fn get_usd_rates(&self) -> Result<RateSnapshot, Error>;
}
