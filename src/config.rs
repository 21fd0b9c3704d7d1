use crate::error::{CardExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 保存済みのサーバーURLより優先される環境変数
pub const SERVER_ENV: &str = "CARD_EXTRACT_SERVER";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Flask開発サーバーの既定ポート
            server_url: "http://127.0.0.1:5000".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CardExtractError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("card-extract").join("config.json"))
    }

    /// 使用するサーバーURL。優先順位: `--server` > 環境変数 > 設定ファイル
    pub fn resolve_server_url(&self, env: Option<String>, flag: Option<&str>) -> String {
        let url = match (flag, env) {
            (Some(flag), _) => flag.to_string(),
            (None, Some(env)) if !env.trim().is_empty() => env,
            _ => self.server_url.clone(),
        };
        url.trim_end_matches('/').to_string()
    }

    pub fn set_server_url(&mut self, url: String) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(CardExtractError::Config(format!(
                "server URL must start with http:// or https://: {}",
                url
            )));
        }
        self.server_url = url;
        self.save()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
