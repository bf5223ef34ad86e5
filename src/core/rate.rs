//! Exchange rate abstractions and error taxonomy.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::currency::Currency;

/// Failure modes of a rate lookup.
///
/// `Status` and `Transport` cover the HTTP layer; `Semantic` covers a
/// 200 response whose payload does not report success or does not match
/// the expected schema. The raw body rides on `Semantic` for diagnostics.
#[derive(Debug, Error)]
pub enum RateError {
    #[error("HTTP {status} al consultar la API")]
    Status { status: reqwest::StatusCode },

    #[error("fallo de red al consultar la API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("respuesta inválida de la API: {body}")]
    Semantic { body: String },
}

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Multiplicative factor converting one unit of `base` into units of
    /// `target`. Returned unmodified from the remote service; no caching,
    /// no retry.
    async fn pair_rate(&self, base: Currency, target: Currency) -> Result<f64, RateError>;

    /// Full rate table relative to `base`, keyed by currency code as
    /// reported by the remote service (not filtered to [`Currency`]).
    async fn latest_table(&self, base: Currency) -> Result<HashMap<String, f64>, RateError>;
}
