use crate::config::Config;
use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Upstream URLs cannot be empty and must use http:// or https://
/// - Port and HTTP timeout must be non-zero
/// - Completion temperature must lie within [0, 2]
/// - If a log file path is provided, it cannot be empty
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url("BGG API URL", &config.bgg_api_url)?;
    validate_url("OpenAI API base", &config.openai_api_base)?;

    if config.openai_model.trim().is_empty() {
        return Err(AppError::config_error("OpenAI model cannot be empty"));
    }

    if config.port == 0 {
        return Err(AppError::config_error("Port must be greater than zero"));
    }

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if !(0.0..=2.0).contains(&config.completion_temperature) {
        return Err(AppError::config_error(format!(
            "Completion temperature {} is outside 0.0..=2.0",
            config.completion_temperature
        )));
    }

    if let Some(log_path) = &config.log_file_path
        && log_path.trim().is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

fn validate_url(label: &str, url: &str) -> Result<(), AppError> {
    if url.trim().is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{label} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_empty_bgg_url() {
        let config = Config {
            bgg_api_url: String::new(),
            ..Config::default()
        };
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("BGG API URL cannot be empty"));
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        let config = Config {
            openai_api_base: "api.openai.com/v1".to_string(),
            ..Config::default()
        };
        assert!(matches!(
            validate_config(&config),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_zero_port_and_timeout() {
        let config = Config {
            port: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let config = Config {
            completion_temperature: 2.5,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_blank_log_path() {
        let config = Config {
            log_file_path: Some("  ".to_string()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
