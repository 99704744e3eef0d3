use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub(crate) const SCRAPING_KEY_PLACEHOLDER: &str = "your-scraping-api-key-here";
pub(crate) const GENERATION_KEY_PLACEHOLDER: &str = "your-generation-api-key-here";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup, no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        match raw.parse::<u64>() {
            Ok(0) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "timeout must be at least one second".to_string(),
            }),
            Ok(secs) => Ok(secs),
            Err(e) => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            }),
        }
    };

    let env = parse_environment(&or_default("LISTOPT_ENV", "development"));
    let bind_addr = parse_addr("LISTOPT_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("LISTOPT_LOG_LEVEL", "info");

    let scraping_api_key = or_default("SCRAPING_API_KEY", SCRAPING_KEY_PLACEHOLDER);
    let scraping_base_url = or_default("SCRAPING_BASE_URL", "https://app.scrapingbee.com/api/v1/");
    let generation_api_key = or_default("GENERATION_API_KEY", GENERATION_KEY_PLACEHOLDER);
    let generation_base_url = or_default(
        "GENERATION_BASE_URL",
        "https://api.openai.com/v1/chat/completions",
    );
    let generation_model = or_default("LISTOPT_GENERATION_MODEL", "gpt-4");

    let fetch_timeout_secs = parse_secs("LISTOPT_FETCH_TIMEOUT_SECS", "30")?;
    let generation_timeout_secs = parse_secs("LISTOPT_GENERATION_TIMEOUT_SECS", "120")?;
    let user_agent = or_default("LISTOPT_USER_AGENT", "listopt/0.1 (listing-optimizer)");

    Ok(AppConfig {
        env,
        bind_addr,
        log_level,
        scraping_api_key,
        scraping_base_url,
        generation_api_key,
        generation_base_url,
        generation_model,
        fetch_timeout_secs,
        generation_timeout_secs,
        user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn parse_environment_production() {
        assert_eq!(parse_environment("production"), Environment::Production);
    }

    #[test]
    fn parse_environment_test() {
        assert_eq!(parse_environment("test"), Environment::Test);
    }

    #[test]
    fn parse_environment_unknown_defaults_to_development() {
        assert_eq!(parse_environment("staging"), Environment::Development);
    }

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults are valid");
        assert_eq!(cfg.env, Environment::Development);
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.scraping_base_url, "https://app.scrapingbee.com/api/v1/");
        assert_eq!(
            cfg.generation_base_url,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(cfg.generation_model, "gpt-4");
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert_eq!(cfg.generation_timeout_secs, 120);
        assert_eq!(cfg.user_agent, "listopt/0.1 (listing-optimizer)");
    }

    #[test]
    fn missing_api_keys_fall_back_to_placeholders() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.scraping_api_key, SCRAPING_KEY_PLACEHOLDER);
        assert_eq!(cfg.generation_api_key, GENERATION_KEY_PLACEHOLDER);
        assert!(cfg.scraping_key_is_placeholder());
        assert!(cfg.generation_key_is_placeholder());
    }

    #[test]
    fn blank_api_key_is_treated_as_missing() {
        let mut map = HashMap::new();
        map.insert("SCRAPING_API_KEY", "   ");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert!(cfg.scraping_key_is_placeholder());
    }

    #[test]
    fn api_keys_are_read_from_env() {
        let mut map = HashMap::new();
        map.insert("SCRAPING_API_KEY", "sb-123");
        map.insert("GENERATION_API_KEY", "sk-456");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.scraping_api_key, "sb-123");
        assert_eq!(cfg.generation_api_key, "sk-456");
        assert!(!cfg.scraping_key_is_placeholder());
        assert!(!cfg.generation_key_is_placeholder());
    }

    #[test]
    fn debug_output_redacts_api_keys() {
        let mut map = HashMap::new();
        map.insert("SCRAPING_API_KEY", "sb-secret");
        map.insert("GENERATION_API_KEY", "sk-secret");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("sb-secret"), "leaked: {rendered}");
        assert!(!rendered.contains("sk-secret"), "leaked: {rendered}");
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("LISTOPT_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LISTOPT_BIND_ADDR"),
            "expected InvalidEnvVar(LISTOPT_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn fetch_timeout_override() {
        let mut map = HashMap::new();
        map.insert("LISTOPT_FETCH_TIMEOUT_SECS", "45");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.fetch_timeout_secs, 45);
    }

    #[test]
    fn fetch_timeout_invalid() {
        let mut map = HashMap::new();
        map.insert("LISTOPT_FETCH_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LISTOPT_FETCH_TIMEOUT_SECS"),
            "expected InvalidEnvVar(LISTOPT_FETCH_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn zero_generation_timeout_is_rejected() {
        let mut map = HashMap::new();
        map.insert("LISTOPT_GENERATION_TIMEOUT_SECS", "0");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "LISTOPT_GENERATION_TIMEOUT_SECS"),
            "expected InvalidEnvVar(LISTOPT_GENERATION_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn generation_model_override() {
        let mut map = HashMap::new();
        map.insert("LISTOPT_GENERATION_MODEL", "gpt-4o-mini");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.generation_model, "gpt-4o-mini");
    }
}
