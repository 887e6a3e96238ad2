use anyhow::{Context, Result};

use crate::services::api::DEFAULT_BASE_URL;
use crate::services::CurrencyFormat;

/// Session settings, fixed at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub currency: CurrencyFormat,
}

impl AppConfig {
    /// Read build-time overrides (`LEDGER_API_URL`, `LEDGER_CURRENCY`)
    pub fn load() -> Result<Self> {
        Self::from_values(option_env!("LEDGER_API_URL"), option_env!("LEDGER_CURRENCY"))
    }

    fn from_values(api_base_url: Option<&str>, currency: Option<&str>) -> Result<Self> {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string();
        let currency = match currency {
            Some(code) => CurrencyFormat::from_code(code)
                .with_context(|| format!("invalid LEDGER_CURRENCY '{}'", code))?,
            None => CurrencyFormat::default(),
        };
        Ok(Self { api_base_url, currency })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            currency: CurrencyFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_values(None, None).unwrap();
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_values(Some("  "), None).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_values(Some("https://budget.example.com"), Some("EUR")).unwrap();
        assert_eq!(config.api_base_url, "https://budget.example.com");
        assert_eq!(config.currency.code, "EUR");
    }

    #[test]
    fn test_bad_currency_is_an_error() {
        let err = AppConfig::from_values(None, Some("ZZZ")).unwrap_err();
        assert!(err.to_string().contains("LEDGER_CURRENCY"));
    }
}
