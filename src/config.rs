use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::{Decimal, RateSchedule, TaxTier};
use crate::report::{NumberFormat, NumberLocale};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rates: RateSchedule,
    pub number_format: NumberFormat,
    pub share_signature: Option<String>,
    pub export_dir: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rates: RateSchedule::default(),
            number_format: NumberFormat::default(),
            share_signature: None,
            export_dir: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let rates = parse_rates_from_map(&env_map)?;

        let locale = match env_map
            .get("NUMBER_LOCALE")
            .map(|s| s.as_str())
            .unwrap_or("ru")
        {
            "ru" => NumberLocale::Ru,
            "en" => NumberLocale::En,
            other => {
                return Err(ConfigError::InvalidValue(
                    "NUMBER_LOCALE".to_string(),
                    format!("must be ru or en, got {}", other),
                ))
            }
        };

        let number_format = match env_map.get("CURRENCY_SUFFIX") {
            Some(suffix) => locale.format().with_currency_suffix(suffix.trim()),
            None => locale.format(),
        };

        let share_signature = env_map
            .get("SHARE_SIGNATURE")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let export_dir = env_map
            .get("EXPORT_DIR")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Config {
            port,
            rates,
            number_format,
            share_signature,
            export_dir,
        })
    }
}

fn parse_rates_from_map(env_map: &HashMap<String, String>) -> Result<RateSchedule, ConfigError> {
    let defaults = RateSchedule::default();

    let acquiring_rate = parse_fraction(env_map, "ACQUIRING_RATE")?.unwrap_or(defaults.acquiring_rate);

    let mut tax_rates = BTreeMap::new();
    for tier in TaxTier::ALL {
        let key = format!("TAX_RATE_{}", tier.as_str().to_uppercase());
        let rate = match parse_fraction(env_map, &key)? {
            Some(rate) => rate,
            None => defaults
                .tax_rate(tier)
                .ok_or_else(|| ConfigError::MissingEnv(key.clone()))?,
        };
        tax_rates.insert(tier, rate);
    }

    Ok(RateSchedule::new(acquiring_rate, tax_rates))
}

/// Parse an optional rate that must be a fraction in `[0, 1]`.
fn parse_fraction(
    env_map: &HashMap<String, String>,
    key: &str,
) -> Result<Option<Decimal>, ConfigError> {
    let Some(raw) = env_map.get(key) else {
        return Ok(None);
    };
    let rate = Decimal::from_str_canonical(raw.trim()).map_err(|_| {
        ConfigError::InvalidValue(key.to_string(), "must be a decimal number".to_string())
    })?;
    if rate.is_negative() || rate > Decimal::from(1u64) {
        return Err(ConfigError::InvalidValue(
            key.to_string(),
            format!("must be a fraction between 0 and 1, got {}", rate),
        ));
    }
    Ok(Some(rate))
}
