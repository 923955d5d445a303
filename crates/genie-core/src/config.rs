//! Genie configuration loader.
//!
//! Reads `genie.toml` from a config directory (`~/.genie/` by default) and
//! deserializes it into [`GenieConfig`].

use std::path::{Path, PathBuf};

use genie_types::config::GenieConfig;
use genie_types::error::ConfigError;

/// File name looked up inside the config directory.
pub const CONFIG_FILE_NAME: &str = "genie.toml";

/// `~/.genie`, or `None` when the home directory cannot be resolved.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".genie"))
}

/// Load the Genie binding from `{config_dir}/genie.toml`.
///
/// - If the file does not exist, returns `Ok(None)`.
/// - If the file cannot be read or parsed, returns the error; a Genie
///   binding has no sensible default space to fall back to.
/// - An empty `space_id` is rejected.
pub async fn load_genie_config(config_dir: &Path) -> Result<Option<GenieConfig>, ConfigError> {
    let config_path = config_dir.join(CONFIG_FILE_NAME);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No {CONFIG_FILE_NAME} found at {}", config_path.display());
            return Ok(None);
        }
        Err(err) => {
            return Err(ConfigError::Read {
                path: config_path.display().to_string(),
                message: err.to_string(),
            });
        }
    };

    let config = parse_genie_config(&content).map_err(|err| match err {
        ConfigError::Parse { message, .. } => ConfigError::Parse {
            path: config_path.display().to_string(),
            message,
        },
        other => other,
    })?;

    tracing::debug!(space_id = %config.space_id, "Loaded Genie config");
    Ok(Some(config))
}

/// Parse a `genie.toml` document.
pub fn parse_genie_config(content: &str) -> Result<GenieConfig, ConfigError> {
    let config: GenieConfig = toml::from_str(content).map_err(|err| ConfigError::Parse {
        path: CONFIG_FILE_NAME.to_string(),
        message: err.to_string(),
    })?;

    if config.space_id.trim().is_empty() {
        return Err(ConfigError::MissingField("space_id"));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_genie_config_missing_file_returns_none() {
        let tmp = TempDir::new().unwrap();
        let config = load_genie_config(tmp.path()).await.unwrap();
        assert!(config.is_none());
    }

    #[tokio::test]
    async fn load_genie_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
space_id = "01ef-sales"
agent_name = "Sales Genie"
"#,
        )
        .await
        .unwrap();

        let config = load_genie_config(tmp.path()).await.unwrap().unwrap();
        assert_eq!(config.space_id, "01ef-sales");
        assert_eq!(config.agent_name, "Sales Genie");
        assert_eq!(
            config.tool_description,
            GenieConfig::new("x").tool_description
        );
    }

    #[tokio::test]
    async fn load_genie_config_invalid_toml_returns_parse_error() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(CONFIG_FILE_NAME);
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let err = load_genie_config(tmp.path()).await.unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => {
                assert_eq!(path, config_path.display().to_string())
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_genie_config_rejects_blank_space_id() {
        let err = parse_genie_config(r#"space_id = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("space_id")));
    }

    #[test]
    fn parse_genie_config_missing_space_id_is_parse_error() {
        let err = parse_genie_config(r#"agent_name = "Genie""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn default_config_dir_ends_with_genie() {
        if let Some(dir) = default_config_dir() {
            assert!(dir.ends_with(".genie"));
        }
    }
}
