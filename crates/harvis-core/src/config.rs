use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

fn default_handshake_delay_ms() -> u64 {
    500
}

/// Global configuration loaded from `~/.config/harvis/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvisConfig {
    /// Connect timeout for the report GET, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout for the report GET, in seconds.
    pub fetch_timeout_secs: u64,
    /// Delay between the report's ready signal and the selection mutations,
    /// in milliseconds. Gives the report time to finish its own synchronous
    /// setup beyond the injected hook.
    #[serde(default = "default_handshake_delay_ms")]
    pub handshake_delay_ms: u64,
    /// Optional default output path for the patched document.
    #[serde(default)]
    pub default_output: Option<PathBuf>,
}

impl Default for HarvisConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            fetch_timeout_secs: 30,
            handshake_delay_ms: default_handshake_delay_ms(),
            default_output: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harvis")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarvisConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarvisConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HarvisConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = HarvisConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.fetch_timeout_secs, 30);
        assert_eq!(cfg.handshake_delay_ms, 500);
        assert!(cfg.default_output.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = HarvisConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: HarvisConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.fetch_timeout_secs, cfg.fetch_timeout_secs);
        assert_eq!(parsed.handshake_delay_ms, cfg.handshake_delay_ms);
    }

    #[test]
    fn config_toml_missing_optional_fields() {
        let toml = r#"
            connect_timeout_secs = 5
            fetch_timeout_secs = 10
        "#;
        let cfg: HarvisConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.fetch_timeout_secs, 10);
        assert_eq!(cfg.handshake_delay_ms, 500);
        assert!(cfg.default_output.is_none());
    }
}
