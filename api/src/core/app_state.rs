use es_client::{EsClient, EsConfig, EsError};
use thiserror::Error;

/// Errors raised while assembling shared state at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },

    #[error("engine client: {0}")]
    Engine(#[from] EsError),
}

/// Search settings fixed per deployment.
#[derive(Clone, Copy, Debug)]
pub struct SearchSettings {
    /// Number of summaries per page.
    pub page_size: u32,
    /// Highest page clients may request; deeper paging is refused to
    /// bound engine load.
    pub max_page: u32,
}

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// The one engine client, opened at startup and reused read-only
    /// across requests.
    pub es: EsClient,
    pub search: SearchSettings,
}

impl AppState {
    /// Load shared state from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let page_size = env_u32("PAGE_SIZE", 15)?;
        if page_size == 0 {
            return Err(ConfigError::Invalid {
                var: "PAGE_SIZE",
                value: "0".into(),
            });
        }
        let max_page = env_u32("MAX_PAGE", 100)?;

        let es = EsClient::new(EsConfig::from_env())?;

        Ok(Self {
            es,
            search: SearchSettings {
                page_size,
                max_page,
            },
        })
    }
}

fn env_u32(var: &'static str, default: u32) -> Result<u32, ConfigError> {
    match std::env::var(var) {
        Ok(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
        Err(_) => Ok(default),
    }
}
