use std::env;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    /// Storefront free-games promotion endpoint
    pub store_api_url: String,
    /// Locale query parameter sent to the storefront
    pub locale: String,
    /// Country query parameter sent to the storefront
    pub country: String,
    /// Seconds between poll cycles
    pub poll_interval_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            store_api_url: env::var("STORE_API_URL").unwrap_or_else(|_| {
                "https://store-site-backend-static.ak.epicgames.com/freeGamesPromotions"
                    .to_string()
            }),
            locale: env::var("STORE_LOCALE").unwrap_or_else(|_| "en-US".to_string()),
            country: env::var("STORE_COUNTRY").unwrap_or_else(|_| "US".to_string()),
            poll_interval_secs: env::var("POLL_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poll_interval_converts_seconds() {
        let config = Config {
            store_api_url: "https://store.test/freeGamesPromotions".to_string(),
            locale: "en-US".to_string(),
            country: "US".to_string(),
            poll_interval_secs: 60,
        };
        assert_eq!(config.poll_interval(), Duration::from_secs(60));
    }
}
