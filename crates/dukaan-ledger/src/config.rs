//! # Application Configuration
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`DUKAAN_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use dukaan_core::{
    DEFAULT_COMPANY_NAME, DEFAULT_CREDIT_DURATION_DAYS, DEFAULT_CUSTOMER_REMINDER_DAYS,
    DEFAULT_OWNER_REMINDER_DAYS,
};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Company name printed on messages and invoices.
    pub company_name: String,

    /// Credit duration applied when the order form leaves it blank.
    pub default_credit_duration_days: u32,

    /// Lead days for the owner payment reminder.
    pub default_owner_reminder_days: u32,

    /// Lead days for the customer payment reminder.
    pub default_customer_reminder_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            default_credit_duration_days: DEFAULT_CREDIT_DURATION_DAYS,
            default_owner_reminder_days: DEFAULT_OWNER_REMINDER_DAYS,
            default_customer_reminder_days: DEFAULT_CUSTOMER_REMINDER_DAYS,
        }
    }
}

impl AppConfig {
    /// Creates an AppConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `DUKAAN_COMPANY_NAME`: Override the company name
    /// - `DUKAAN_CREDIT_DAYS`: Override the default credit duration
    pub fn from_env() -> Self {
        let mut config = AppConfig::default();

        if let Ok(name) = std::env::var("DUKAAN_COMPANY_NAME") {
            if !name.trim().is_empty() {
                config.company_name = name;
            }
        }

        if let Ok(days) = std::env::var("DUKAAN_CREDIT_DAYS") {
            if let Ok(days) = days.parse::<u32>() {
                config.default_credit_duration_days = days;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.company_name, "Pooja Graphic");
        assert_eq!(config.default_credit_duration_days, 30);
        assert_eq!(config.default_owner_reminder_days, 5);
        assert_eq!(config.default_customer_reminder_days, 7);
    }
}
