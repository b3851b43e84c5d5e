use std::time::Duration;

use secrecy::SecretString;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::TemplateId;
use crate::exchange_rates::{CurrencyRates, ExchangeRateClient};

#[derive(serde::Deserialize, Debug, Clone)]
pub struct Settings {
    pub app: ApplicationSettings,
    pub exchange_rates: ExchangeRateSettings,
    pub campaign: CampaignSettings,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct ExchangeRateSettings {
    pub base_url: String,
    pub access_key: Option<SecretString>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_ms: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub staleness_secs: u64,
    /// How long to leave the provider alone after a failed refresh.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub retry_secs: u64,
}

impl ExchangeRateSettings {
    pub fn client(self) -> Result<ExchangeRateClient, anyhow::Error> {
        let timeout = self.timeout();
        ExchangeRateClient::new(self.base_url, self.access_key, timeout)
    }

    /// The client wrapped in the one-table cache shared by every worker.
    pub fn currency_rates(self) -> Result<CurrencyRates, anyhow::Error> {
        let staleness = self.staleness();
        let retry_after = self.retry_after();
        Ok(CurrencyRates::new(self.client()?, staleness, retry_after))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn staleness(&self) -> Duration {
        Duration::from_secs(self.staleness_secs)
    }

    pub fn retry_after(&self) -> Duration {
        Duration::from_secs(self.retry_secs)
    }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct CampaignSettings {
    pub default_template: TemplateId,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub base_cpm: f64,
    /// When set, an unknown template id renders with `default_template`
    /// instead of failing the request.
    pub fallback_to_default_template: bool,
}

impl CampaignSettings {
    pub fn template_fallback(&self) -> Option<TemplateId> {
        self.fallback_to_default_template
            .then_some(self.default_template)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{other} is not supported environment. Try to use `local` or `production`",
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine current directory: {e}"))
    })?;
    let conf_dir = base_path.join("configuration");
    let env: Environment = std::env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let settings = config::Config::builder()
        .add_source(config::File::from(conf_dir.join("base")).required(true))
        .add_source(config::File::from(conf_dir.join(env.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .prefix_separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
