use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "CountryGreeterBot/1.0";

/// HTTP client used by teloxide. The read timeout stays above teloxide's
/// long-polling timeout so `getUpdates` is not cut short.
pub fn create_telegram_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .pool_idle_timeout(Duration::from_secs(60))
        .tcp_keepalive(Duration::from_secs(30))
        .user_agent(DEFAULT_USER_AGENT)
        .build()
}
