use super::{cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

/// Every cart route is served below this prefix.
pub const API_BASE_PATH: &str = "/api/v1";

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
