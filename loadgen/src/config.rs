use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;

pub const DEFAULT_HOST: &str =
    "https://taller-n8n-capp-mode-queue.delightfultree-7f42d56b.eastus2.azurecontainerapps.io/webhook";
const DEFAULT_TOKEN: &str = "chatdfsdfsecret";

const DEFAULT_USERS: usize = 10;
const DEFAULT_RUN_DURATION_SECS: u64 = 60;
const DEFAULT_WAIT_MIN_SECS: f64 = 1.0;
const DEFAULT_WAIT_MAX_SECS: f64 = 2.0;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Where requests go and how they are authenticated.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    pub base_url: String,
    pub token: String,
    pub request_timeout: Duration,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOST.to_string(),
            token: DEFAULT_TOKEN.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// How much traffic to generate: simulated user count, run length, and the
/// per-user wait interval between requests.
#[derive(Debug, Clone)]
pub struct LoadConfig {
    pub users: usize,
    pub duration: Duration,
    pub wait_min_secs: f64,
    pub wait_max_secs: f64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USERS,
            duration: Duration::from_secs(DEFAULT_RUN_DURATION_SECS),
            wait_min_secs: DEFAULT_WAIT_MIN_SECS,
            wait_max_secs: DEFAULT_WAIT_MAX_SECS,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub target: TargetConfig,
    pub load: LoadConfig,
}

impl RunConfig {
    /// Reads the run configuration from the environment, falling back to the
    /// built-in defaults, and validates it before any traffic is generated.
    pub fn from_env() -> Result<Self> {
        let target = TargetConfig {
            base_url: env::var("TARGET_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            token: env::var("TARGET_TOKEN").unwrap_or_else(|_| DEFAULT_TOKEN.to_string()),
            request_timeout: Duration::from_secs(env_or(
                "REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )?),
        };

        let load = LoadConfig {
            users: env_or("USERS", DEFAULT_USERS)?,
            duration: Duration::from_secs(env_or(
                "RUN_DURATION_SECS",
                DEFAULT_RUN_DURATION_SECS,
            )?),
            wait_min_secs: env_or("WAIT_MIN_SECS", DEFAULT_WAIT_MIN_SECS)?,
            wait_max_secs: env_or("WAIT_MAX_SECS", DEFAULT_WAIT_MAX_SECS)?,
        };

        let config = Self { target, load };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target.base_url.is_empty() {
            return Err(anyhow::anyhow!("TARGET_HOST must not be empty"));
        }
        if self.target.request_timeout.is_zero() {
            return Err(anyhow::anyhow!("REQUEST_TIMEOUT_SECS must be at least 1"));
        }
        if self.load.users == 0 {
            return Err(anyhow::anyhow!("USERS must be at least 1"));
        }
        if self.load.duration.is_zero() {
            return Err(anyhow::anyhow!("RUN_DURATION_SECS must be at least 1"));
        }
        if self.load.wait_min_secs < 0.0 {
            return Err(anyhow::anyhow!("WAIT_MIN_SECS must not be negative"));
        }
        if self.load.wait_min_secs > self.load.wait_max_secs {
            return Err(anyhow::anyhow!(
                "WAIT_MIN_SECS ({}) must not exceed WAIT_MAX_SECS ({})",
                self.load.wait_min_secs,
                self.load.wait_max_secs
            ));
        }
        Ok(())
    }
}

fn env_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| anyhow::anyhow!("{} has an invalid value '{}': {}", name, raw, e)),
        Err(_) => Ok(default),
    }
}
