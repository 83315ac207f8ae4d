//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Address, site root and reload port come from `[package.metadata.leptos]`
//! (or the `LEPTOS_*` variables) and are not duplicated here.

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Compress rendered pages and assets (`SAKI_COMPRESSION`, default on)
    pub compression: bool,

    /// Serve `.br`/`.gz` siblings of files under `/pkg` when present
    /// (`SAKI_PRECOMPRESSED`, default on)
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            compression: env_flag("SAKI_COMPRESSION", true),
            precompressed_assets: env_flag("SAKI_PRECOMPRESSED", true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => parse_flag(&value).unwrap_or_else(|| {
            tracing::warn!("Ignoring unrecognized value {:?} for {}", value, name);
            default
        }),
        Err(_) => default,
    }
}

/// Parse a boolean toggle; `None` for anything unrecognized
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Flag parsing (no env var dependencies - thread safe)
    // ========================================================================

    #[test]
    fn test_parse_flag_true_values() {
        for value in ["1", "true", "TRUE", "yes", "On", " true "] {
            assert_eq!(parse_flag(value), Some(true), "value {value:?}");
        }
    }

    #[test]
    fn test_parse_flag_false_values() {
        for value in ["0", "false", "False", "no", "off"] {
            assert_eq!(parse_flag(value), Some(false), "value {value:?}");
        }
    }

    #[test]
    fn test_parse_flag_unrecognized() {
        assert_eq!(parse_flag(""), None);
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_default_enables_everything() {
        let config = Config::default();
        assert!(config.compression);
        assert!(config.precompressed_assets);
    }

    #[test]
    fn test_env_flag_missing_variable_uses_default() {
        assert!(env_flag("SAKI_TEST_FLAG_THAT_IS_NEVER_SET", true));
        assert!(!env_flag("SAKI_TEST_FLAG_THAT_IS_NEVER_SET", false));
    }
}
