//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Projection engine configuration.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Period summary cache configuration.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Projection engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Default spacing between installments when a payment plan does not
    /// specify one, in days.
    #[serde(default = "default_installment_interval_days")]
    pub default_installment_interval_days: i64,
    /// Fallback used for the per-installment amount when a multi-installment
    /// plan omits it: "method_total" repeats the method's full amount,
    /// "zero" contributes nothing.
    #[serde(default = "default_amount_fallback")]
    pub installment_amount_fallback: String,
}

fn default_installment_interval_days() -> i64 {
    30
}

fn default_amount_fallback() -> String {
    "method_total".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_installment_interval_days: default_installment_interval_days(),
            installment_amount_fallback: default_amount_fallback(),
        }
    }
}

/// Period summary cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached summaries.
    #[serde(default = "default_cache_capacity")]
    pub max_capacity: u64,
    /// Time-to-live for cached summaries in seconds.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,
}

fn default_cache_capacity() -> u64 {
    100
}

fn default_cache_ttl() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_cache_capacity(),
            ttl_secs: default_cache_ttl(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FLUXO").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults() {
        let engine = EngineConfig::default();
        assert_eq!(engine.default_installment_interval_days, 30);
        assert_eq!(engine.installment_amount_fallback, "method_total");
    }

    #[test]
    fn test_cache_defaults() {
        let cache = CacheConfig::default();
        assert_eq!(cache.max_capacity, 100);
        assert_eq!(cache.ttl_secs, 300);
    }
}
