use crate::error::{GalleryError, Result};
use portfolio_common::{DEFAULT_CATALOG_SIZE, MAX_CATALOG_SIZE};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// シードを上書きする環境変数
pub const SEED_ENV: &str = "PORTFOLIO_GALLERY_SEED";

const CONFIG_DIR: &str = "portfolio-gallery";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 生成件数
    pub catalog_count: usize,
    /// 固定シード（未設定なら毎回ランダム）
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_count: DEFAULT_CATALOG_SIZE,
            seed: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定ファイルを読み込む（なければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };

        let config: Config = serde_json::from_str(&content)?;
        validate_count(config.catalog_count)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(dir) = config_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(config_path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// `~/.config/portfolio-gallery/config.json`
    pub fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or_else(|| GalleryError::Config("ホームディレクトリが見つかりません".into()))
    }

    /// 生成件数を設定（上限を超える値は拒否）
    pub fn set_catalog_count(&mut self, count: usize) -> Result<()> {
        validate_count(count)?;
        self.catalog_count = count;
        Ok(())
    }

    /// 有効なシード（環境変数を優先）
    pub fn effective_seed(&self) -> Result<Option<u64>> {
        match std::env::var(SEED_ENV) {
            Ok(value) => parse_seed(&value).map(Some),
            Err(_) => Ok(self.seed),
        }
    }
}

fn validate_count(count: usize) -> Result<()> {
    if count > MAX_CATALOG_SIZE {
        return Err(GalleryError::Config(format!(
            "生成件数が上限({})を超えています: {}",
            MAX_CATALOG_SIZE, count
        )));
    }
    Ok(())
}

fn parse_seed(value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| GalleryError::Config(format!("{} が数値ではありません: {}", SEED_ENV, value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.catalog_count, 105);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"seed": 7}"#).expect("デシリアライズ失敗");
        assert_eq!(config.catalog_count, 105);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_parse_seed() {
        assert_eq!(parse_seed(" 42 ").unwrap(), 42);
        assert!(matches!(parse_seed("abc"), Err(GalleryError::Config(_))));
    }

    #[test]
    fn test_set_catalog_count() {
        let mut config = Config::default();
        config.set_catalog_count(240).expect("設定失敗");
        assert_eq!(config.catalog_count, 240);

        config.set_catalog_count(0).expect("0件は有効");
        assert_eq!(config.catalog_count, 0);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_set_catalog_count_over_limit() {
        let mut config = Config::default();
        let result = config.set_catalog_count(MAX_CATALOG_SIZE + 1);
        assert!(matches!(result, Err(GalleryError::Config(_))));
        assert_eq!(config.catalog_count, 105);
    }
}
