use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::currency::Currency;
use crate::core::rate::{RateError, RateProvider};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Rate provider backed by the exchangerate-api.com v6 REST service.
///
/// Endpoints follow `{base_url}/{api_key}/pair/{BASE}/{TARGET}` and
/// `{base_url}/{api_key}/latest/{BASE}`.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get(&self, url: &str) -> Result<String, RateError> {
        let client = reqwest::Client::builder()
            .user_agent("fxconv/1.0")
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let response = client.get(url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(RateError::Status { status });
        }

        Ok(response.text().await?)
    }
}

#[derive(Debug, Deserialize)]
struct PairResponse {
    result: Option<String>,
    conversion_rate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    result: Option<String>,
    conversion_rates: Option<HashMap<String, f64>>,
}

/// The service reports `"result": "success"` on every good payload, even
/// with HTTP 200, so the field is validated before any value is used.
fn ensure_success(result: Option<&str>, body: &str) -> Result<(), RateError> {
    match result {
        Some(value) if value.eq_ignore_ascii_case("success") => Ok(()),
        _ => Err(RateError::Semantic {
            body: body.to_string(),
        }),
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    #[instrument(name = "PairRateFetch", skip(self), fields(base = %base, target = %target))]
    async fn pair_rate(&self, base: Currency, target: Currency) -> Result<f64, RateError> {
        let url = format!("{}/{}/pair/{}/{}", self.base_url, self.api_key, base, target);
        debug!("Requesting pair rate for {base} -> {target}");

        let body = self.get(&url).await?;
        let response: PairResponse = serde_json::from_str(&body).map_err(|_| {
            RateError::Semantic { body: body.clone() }
        })?;
        ensure_success(response.result.as_deref(), &body)?;

        response.conversion_rate.ok_or(RateError::Semantic { body })
    }

    #[instrument(name = "LatestTableFetch", skip(self), fields(base = %base))]
    async fn latest_table(&self, base: Currency) -> Result<HashMap<String, f64>, RateError> {
        let url = format!("{}/{}/latest/{}", self.base_url, self.api_key, base);
        debug!("Requesting latest rate table for {base}");

        let body = self.get(&url).await?;
        let response: LatestResponse = serde_json::from_str(&body).map_err(|_| {
            RateError::Semantic { body: body.clone() }
        })?;
        ensure_success(response.result.as_deref(), &body)?;

        response.conversion_rates.ok_or(RateError::Semantic { body })
    }
}
