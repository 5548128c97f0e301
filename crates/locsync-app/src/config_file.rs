use std::fs;
use std::path::Path;

use anyhow::Context;
use locsync_config::Config;

/// Write a config file holding only defaults
fn write_default_config(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&Config::default())?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::info!("Created config file at {}", path.display());
    Ok(())
}

/// Load the config at `path`, creating it with defaults on first run
pub fn load_or_create_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        tracing::info!(
            "{} not found. Creating it with the default configuration...",
            path.display()
        );
        write_default_config(path)?;
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = serde_json::from_str(&data)
        .with_context(|| format!("Invalid config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_creates_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.config.json");

        let config = load_or_create_config(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config, Config::default());
        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["languageSource"], "./src/languages/pt.json");
        assert_eq!(written["azureApiKey"], "YOUR_AZURE_API_KEY");
    }

    #[test]
    fn test_existing_config_is_not_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.config.json");
        fs::write(&path, r#"{ "languages": ["de", "it"], "continueOnError": true }"#).unwrap();

        let config = load_or_create_config(&path).unwrap();

        assert_eq!(config.languages, vec!["de", "it"]);
        assert!(config.continue_on_error);
        assert!(fs::read_to_string(&path).unwrap().contains("\"it\""));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("translator.config.json");
        fs::write(&path, "module.exports = {}").unwrap();

        let err = load_or_create_config(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
