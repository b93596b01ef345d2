use std::{env, fmt::Display, str::FromStr, time::Duration};

use anyhow::{Context, anyhow};
use chrono_tz::Tz;
use dotenvy::dotenv;

use crate::{calendar::StartOfWeek, model::schema::LeaveSchema};

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub leaves_api_url: String,
    pub leaves_sheet: String,
    pub holidays_sheet: String,

    // Calendar
    pub start_of_week: StartOfWeek,
    pub business_timezone: Tz,

    // Rate limiting
    pub rate_login_per_min: u32,
    pub rate_protected_per_min: u32,

    pub cache_ttl: Duration,
    pub upstream_timeout: Duration,

    // Submission form
    pub allowed_email_domain: Option<String>,
    pub schema: LeaveSchema,

    pub api_prefix: String,
    pub log_dir: String,
}

fn var_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| anyhow!("{key} is invalid ({raw:?}): {e}")),
        Err(_) => Ok(default),
    }
}

fn optional_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    /// Everything at its default except the endpoint URL.
    pub fn with_defaults(leaves_api_url: impl Into<String>) -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            leaves_api_url: leaves_api_url.into(),
            leaves_sheet: "DB".to_string(),
            holidays_sheet: "Holidays".to_string(),
            start_of_week: StartOfWeek::SUNDAY,
            business_timezone: Tz::Asia__Kolkata,
            rate_login_per_min: 60,
            rate_protected_per_min: 1000,
            cache_ttl: Duration::from_secs(300),
            upstream_timeout: Duration::from_secs(30),
            allowed_email_domain: None,
            schema: LeaveSchema::default(),
            api_prefix: "/api".to_string(),
            log_dir: "logs".to_string(),
        }
    }

    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();

        let leaves_api_url = env::var("LEAVES_API_URL").context("LEAVES_API_URL must be set")?;
        let defaults = Self::with_defaults(leaves_api_url);

        let start_of_week: u8 = var_or("START_OF_WEEK", 0)?;
        let start_of_week =
            StartOfWeek::new(start_of_week).map_err(|e| anyhow!("START_OF_WEEK: {e}"))?;

        let business_timezone: Tz = match optional_var("BUSINESS_TIMEZONE") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| anyhow!("BUSINESS_TIMEZONE is invalid ({raw:?}): {e}"))?,
            None => defaults.business_timezone,
        };

        Ok(Self {
            server_addr: var_or("SERVER_ADDR", defaults.server_addr)?,
            leaves_sheet: var_or("LEAVES_SHEET", defaults.leaves_sheet)?,
            holidays_sheet: var_or("HOLIDAYS_SHEET", defaults.holidays_sheet)?,
            start_of_week,
            business_timezone,
            rate_login_per_min: var_or("RATE_LOGIN_PER_MIN", defaults.rate_login_per_min)?,
            rate_protected_per_min: var_or(
                "RATE_PROTECTED_PER_MIN",
                defaults.rate_protected_per_min,
            )?,
            cache_ttl: Duration::from_secs(var_or("CACHE_TTL_SECS", 300)?),
            upstream_timeout: Duration::from_secs(var_or("UPSTREAM_TIMEOUT_SECS", 30)?),
            allowed_email_domain: optional_var("ALLOWED_EMAIL_DOMAIN"),
            schema: LeaveSchema::with_overrides(
                optional_var("LEAVE_DEPARTMENTS").as_deref(),
                optional_var("LEAVE_TYPES").as_deref(),
                optional_var("LEAVE_CATEGORIES").as_deref(),
            ),
            api_prefix: var_or("API_PREFIX", defaults.api_prefix)?,
            log_dir: var_or("LOG_DIR", defaults.log_dir)?,
            leaves_api_url: defaults.leaves_api_url,
        })
    }
}
