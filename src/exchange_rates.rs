use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

/// Multipliers relative to EUR, keyed by upper-case ISO code.
pub type RateTable = HashMap<String, f64>;

#[derive(thiserror::Error, Debug)]
pub enum RateFetchError {
    #[error("Failed to fetch exchange rates.")]
    Request(#[from] reqwest::Error),
    #[error("The exchange rate provider returned an empty rate table.")]
    EmptyTable,
}

#[derive(serde::Deserialize)]
struct LatestRatesResponse {
    #[serde(default)]
    rates: RateTable,
}

#[derive(Clone)]
pub struct ExchangeRateClient {
    http_client: Client,
    latest_url: Url,
    access_key: Option<SecretString>,
}

impl ExchangeRateClient {
    pub fn new(
        base_url: String,
        access_key: Option<SecretString>,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed building the exchange rate http client.")?;
        let latest_url = Url::parse(&base_url)
            .and_then(|url| url.join("latest"))
            .context("Failed parsing exchange rate api url.")?;

        Ok(Self {
            http_client,
            latest_url,
            access_key,
        })
    }

    #[tracing::instrument(name = "Fetching EUR exchange rates", skip(self))]
    pub async fn fetch_rates(&self) -> Result<RateTable, RateFetchError> {
        let mut request = self
            .http_client
            .get(self.latest_url.clone())
            .query(&[("base", "EUR")]);
        if let Some(key) = &self.access_key {
            request = request.query(&[("access_key", key.expose_secret())]);
        }

        let body: LatestRatesResponse = request.send().await?.error_for_status()?.json().await?;
        if body.rates.is_empty() {
            return Err(RateFetchError::EmptyTable);
        }

        Ok(body.rates)
    }
}

struct CachedRates {
    table: Arc<RateTable>,
    fetched_at: Instant,
}

#[derive(Default)]
struct RateCache {
    rates: Option<CachedRates>,
    last_failure: Option<Instant>,
}

impl RateCache {
    fn table(&self) -> Option<Arc<RateTable>> {
        self.rates.as_ref().map(|c| Arc::clone(&c.table))
    }
}

/// Process-wide rate table, refreshed at most once per staleness window.
///
/// The lock is held across the refresh, so concurrent callers wait for the
/// one request in flight and then read its result. After a failed refresh the
/// provider is left alone for `retry_after`; meanwhile callers get whatever
/// table was cached before, or none.
pub struct CurrencyRates {
    client: ExchangeRateClient,
    staleness: Duration,
    retry_after: Duration,
    cache: Mutex<RateCache>,
}

impl CurrencyRates {
    pub fn new(client: ExchangeRateClient, staleness: Duration, retry_after: Duration) -> Self {
        Self {
            client,
            staleness,
            retry_after,
            cache: Mutex::new(RateCache::default()),
        }
    }

    pub async fn current(&self) -> Option<Arc<RateTable>> {
        let mut cache = self.cache.lock().await;
        if let Some(cached) = cache
            .rates
            .as_ref()
            .filter(|c| c.fetched_at.elapsed() < self.staleness)
        {
            return Some(Arc::clone(&cached.table));
        }
        if cache
            .last_failure
            .is_some_and(|failed_at| failed_at.elapsed() < self.retry_after)
        {
            return cache.table();
        }

        match self.client.fetch_rates().await {
            Ok(table) => {
                let table = Arc::new(table);
                *cache = RateCache {
                    rates: Some(CachedRates {
                        table: Arc::clone(&table),
                        fetched_at: Instant::now(),
                    }),
                    last_failure: None,
                };
                Some(table)
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    has_previous_table = cache.rates.is_some(),
                    retry_in_secs = self.retry_after.as_secs(),
                    "Failed to refresh exchange rates"
                );
                cache.last_failure = Some(Instant::now());
                cache.table()
            }
        }
    }

    pub async fn rate(&self, currency: &str) -> Option<f64> {
        self.current()
            .await?
            .get(&currency.to_uppercase())
            .copied()
    }

    /// EUR amounts never trigger a fetch.
    #[tracing::instrument(name = "Converting to EUR", skip(self))]
    pub async fn convert_to_eur(&self, amount: f64, currency: &str) -> f64 {
        if currency.eq_ignore_ascii_case("EUR") {
            return amount;
        }
        let table = self.current().await;
        convert_to_eur(amount, currency, table.as_deref())
    }
}

/// `amount / rate` for a usable cached rate, `amount` unchanged otherwise.
pub fn convert_to_eur(amount: f64, currency: &str, rates: Option<&RateTable>) -> f64 {
    if currency.eq_ignore_ascii_case("EUR") {
        return amount;
    }
    match rates.and_then(|r| r.get(&currency.to_uppercase())) {
        Some(&rate) if rate.is_finite() && rate != 0.0 => amount / rate,
        _ => amount,
    }
}
