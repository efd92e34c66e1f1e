use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

use crate::models::{hours::BusinessHours, retry::RetryConfig};

#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    #[serde(default = "default_business_phone")]
    pub business_phone: String,
    #[serde(default = "default_site_origin")]
    pub site_origin: String,

    #[serde(default = "default_order_api_url")]
    pub order_api_url: String,
    #[serde(default = "default_order_api_timeout_ms")]
    pub order_api_timeout_ms: u64,
    #[serde(default = "default_health_check_timeout_ms")]
    pub health_check_timeout_ms: u64,

    #[serde(default = "default_business_open_hour")]
    pub business_open_hour: u32,
    #[serde(default = "default_business_close_hour")]
    pub business_close_hour: u32,
    #[serde(default = "default_business_utc_offset_hours")]
    pub business_utc_offset_hours: i32,

    #[serde(default = "default_max_retry_attempts")]
    pub max_retry_attempts: u32,
    #[serde(default = "default_initial_retry_delay_ms")]
    pub initial_retry_delay_ms: u64,
    #[serde(default = "default_max_retry_delay_ms")]
    pub max_retry_delay_ms: u64,
    #[serde(default = "default_retry_backoff_multiplier")]
    pub retry_backoff_multiplier: u64,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| anyhow!("Invalid environmental variable: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from explicit key/value pairs instead of the
    /// process environment. Keys use the same upper-case names as the env.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Self>(pairs)
            .map_err(|e| anyhow!("Invalid configuration value: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.business_open_hour > 23 || self.business_close_hour > 24 {
            return Err(anyhow!("Business hours must fall within 0-24"));
        }

        if self.business_open_hour >= self.business_close_hour {
            return Err(anyhow!(
                "Business open hour ({}) must be before close hour ({})",
                self.business_open_hour,
                self.business_close_hour
            ));
        }

        if !(-12..=14).contains(&self.business_utc_offset_hours) {
            return Err(anyhow!("Business UTC offset must be between -12 and 14"));
        }

        if self.max_retry_attempts == 0 {
            return Err(anyhow!("MAX_RETRY_ATTEMPTS must be at least 1"));
        }

        Ok(())
    }

    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_retry_attempts,
            initial_delay_ms: self.initial_retry_delay_ms,
            max_delay_ms: self.max_retry_delay_ms,
            backoff_multiplier: self.retry_backoff_multiplier,
        }
    }

    pub fn business_hours(&self) -> BusinessHours {
        BusinessHours::new(
            self.business_open_hour,
            self.business_close_hour,
            self.business_utc_offset_hours,
        )
    }
}

fn default_business_phone() -> String {
    "254714042307".to_string()
}

fn default_site_origin() -> String {
    "https://seraskitchen.co.ke".to_string()
}

fn default_order_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_order_api_timeout_ms() -> u64 {
    10_000
}

fn default_health_check_timeout_ms() -> u64 {
    5_000
}

fn default_business_open_hour() -> u32 {
    8
}

fn default_business_close_hour() -> u32 {
    22
}

fn default_business_utc_offset_hours() -> i32 {
    3
}

fn default_max_retry_attempts() -> u32 {
    3
}

fn default_initial_retry_delay_ms() -> u64 {
    200
}

fn default_max_retry_delay_ms() -> u64 {
    2_000
}

fn default_retry_backoff_multiplier() -> u64 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}
