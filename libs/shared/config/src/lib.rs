use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub enable_test_routes: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("PORT is not a valid port number, using default 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let enable_test_routes = env::var("ENABLE_TEST_ROUTES")
            .map(|value| value == "true" || value == "1")
            .unwrap_or(false);

        if enable_test_routes {
            warn!("Test routes enabled - do not run with this flag in production");
        }

        Self {
            port,
            enable_test_routes,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            enable_test_routes: false,
        }
    }
}
