use certreg_utils::create_random_secret;
use chrono_tz::Tz;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct EmailRelayConfig {
    /// Endpoint that accepts composed mails and performs the delivery
    pub url: String,
    /// Shared secret sent in the `certreg-relay-key` header
    pub key: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret key that must be provided on admin routes
    pub api_key: String,
    /// Port for the application to run on
    pub port: usize,
    /// Reporting timezone. "Today" is always the current calendar date in
    /// this timezone, for both the interactive expiration check and the
    /// scheduled digest, so the two can never disagree on day distances.
    pub timezone: Tz,
    /// Hour of day (0-23) in `timezone` at which the daily digest runs
    pub digest_hour: u32,
    /// Outbound email relay. When absent, digest dispatch is recorded
    /// in memory only.
    pub email_relay: Option<EmailRelayConfig>,
}

impl Config {
    pub fn new() -> Self {
        let api_key = match std::env::var("API_KEY") {
            Ok(key) => key,
            Err(_) => {
                info!("Did not find API_KEY environment variable. Going to create one.");
                let key = create_random_secret(16);
                info!("Admin api key was generated and set to: {}", key);
                key
            }
        };

        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or(default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                default_port.parse::<usize>().unwrap()
            }
        };

        let default_timezone = "America/New_York";
        let timezone = std::env::var("TIMEZONE").unwrap_or_else(|_| default_timezone.into());
        let timezone = match timezone.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                warn!(
                    "The given TIMEZONE: {} is not a valid IANA timezone, falling back to the default: {}.",
                    timezone, default_timezone
                );
                chrono_tz::America::New_York
            }
        };

        let default_digest_hour = 9;
        let digest_hour = match std::env::var("DIGEST_HOUR") {
            Ok(hour) => match hour.parse::<u32>() {
                Ok(hour) if hour < 24 => hour,
                _ => {
                    warn!(
                        "The given DIGEST_HOUR: {} is not an hour between 0 and 23, falling back to the default: {}.",
                        hour, default_digest_hour
                    );
                    default_digest_hour
                }
            },
            Err(_) => default_digest_hour,
        };

        let email_relay = match std::env::var("EMAIL_RELAY_URL") {
            Ok(url) => {
                let key = std::env::var("EMAIL_RELAY_KEY").unwrap_or_else(|_| {
                    warn!("EMAIL_RELAY_KEY is not set, using an empty relay key.");
                    String::new()
                });
                Some(EmailRelayConfig { url, key })
            }
            Err(_) => None,
        };

        Self {
            api_key,
            port,
            timezone,
            digest_hour,
            email_relay,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
