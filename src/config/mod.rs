use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub search: SearchConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout: u64,
}

/// Object storage settings. Credentials are resolved by the AWS SDK default
/// chain (env vars, profile, instance metadata), never held here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub bucket: String,
    pub region: Option<String>,
    /// Custom endpoint for S3-compatible services (e.g. MinIO in development).
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub bcrypt_cost: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("PORT").or_else(|_| env::var("REEL_API_PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("SERVER_ENABLE_CORS") {
            self.server.enable_cors = v.parse().unwrap_or(self.server.enable_cors);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }

        // Object storage overrides
        if let Ok(v) = env::var("AWS_BUCKET_NAME") {
            self.storage.bucket = v;
        }
        if let Ok(v) = env::var("AWS_REGION") {
            self.storage.region = Some(v);
        }
        if let Ok(v) = env::var("STORAGE_ENDPOINT") {
            self.storage.endpoint = Some(v);
        }

        // Search provider overrides
        if let Ok(v) = env::var("SEARCH_API_KEY") {
            self.search.api_key = v;
        }
        if let Ok(v) = env::var("SEARCH_BASE_URL") {
            self.search.base_url = v;
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_BCRYPT_COST") {
            self.security.bcrypt_cost = v.parse().unwrap_or(self.security.bcrypt_cost);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
            },
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout: 30,
            },
            storage: StorageConfig {
                bucket: String::new(),
                region: None,
                endpoint: None,
            },
            search: SearchConfig {
                api_key: String::new(),
                base_url: "https://api.yelp.com/v3".to_string(),
            },
            security: SecurityConfig {
                // low cost keeps local account fixtures fast
                bcrypt_cost: 6,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
            },
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout: 10,
            },
            storage: StorageConfig {
                bucket: String::new(),
                region: None,
                endpoint: None,
            },
            search: SearchConfig {
                api_key: String::new(),
                base_url: "https://api.yelp.com/v3".to_string(),
            },
            security: SecurityConfig { bcrypt_cost: 12 },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3000,
                enable_cors: true,
            },
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout: 5,
            },
            storage: StorageConfig {
                bucket: String::new(),
                region: None,
                endpoint: None,
            },
            search: SearchConfig {
                api_key: String::new(),
                base_url: "https://api.yelp.com/v3".to_string(),
            },
            security: SecurityConfig { bcrypt_cost: 12 },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.security.bcrypt_cost, 6);
        assert!(config.storage.bucket.is_empty());
    }

    #[test]
    fn test_default_production_config() {
        let config = AppConfig::production();
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.security.bcrypt_cost, 12);
    }
}
