use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Error;
use crate::service::rate::*;

pub const DEFAULT_URL: &str = "https://api.coinbase.com/v2/exchange-rates?currency=USD";

pub struct Provider {
    client: reqwest::Client,
    url: String,
}

impl Provider {
    pub fn new(url: Option<String>, timeout: Option<Duration>) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(Error::Request)?;

        Ok(Self::with_client(client, url.unwrap_or_else(|| DEFAULT_URL.into())))
    }

    pub fn with_client(client: reqwest::Client, url: String) -> Self {
        Self { client, url }
    }
}

impl RateProvider for Provider {
    async fn get_usd_rates(&self) -> Result<RateSnapshot, Error> {
        debug!("requesting rates from url={}", self.url);

        let resp = self.client.get(&self.url)
            .send().await
            .map_err(Error::Request)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        // bytes() drains the body and hands the connection back even when decoding fails below
        let body = resp.bytes().await.map_err(Error::Body)?;

        let res: api::Response = serde_json::from_slice(&body).map_err(Error::Decode)?;

        if res.data.currency != "USD" {
            warn!("rates api returned base currency={} instead of USD", res.data.currency);
        }

        Ok(RateSnapshot::new(res.data.currency, res.data.rates))
    }
}

mod api {
    use std::collections::HashMap;

    use serde::Deserialize;

    #[derive(Deserialize, Debug)]
    pub struct Response {
        pub data: Data,
    }

    #[derive(Deserialize, Debug)]
    pub struct Data {
        pub currency: String,
        pub rates: HashMap<String, String>,
    }
}
