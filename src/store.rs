//! カタログJSONの読み書き

use crate::error::{GalleryError, Result};
use portfolio_common::{is_pool_category, Catalog, YEAR_MAX, YEAR_MIN};
use std::path::Path;
use tracing::{debug, warn};

/// カタログJSONを読み込み、idと年の範囲を検証する
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    if !path.exists() {
        return Err(GalleryError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let catalog: Catalog = serde_json::from_str(&content)?;
    validate_catalog(&catalog)?;

    debug!(path = %path.display(), records = catalog.len(), "カタログ読み込み");
    Ok(catalog)
}

/// カタログをJSONで保存
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(path, serde_json::to_string_pretty(catalog)?)?;
    debug!(path = %path.display(), records = catalog.len(), "カタログ保存");
    Ok(())
}

/// idが1からの連番で、年が範囲内であること
///
/// プール外のカテゴリは警告のみで、通常のラベルとして受け入れる。
pub fn validate_catalog(catalog: &Catalog) -> Result<()> {
    let unknown = catalog.iter().filter(|r| !is_pool_category(&r.category)).count();
    if unknown > 0 {
        warn!(records = unknown, "プール外のカテゴリを含むレコードがあります");
    }

    for (i, record) in catalog.iter().enumerate() {
        let expected = i as u32 + 1;
        if record.id != expected {
            return Err(GalleryError::InvalidCatalog(format!(
                "{}件目のidが{}です（期待値: {}）",
                expected, record.id, expected
            )));
        }
        if !(YEAR_MIN..=YEAR_MAX).contains(&record.year) {
            return Err(GalleryError::InvalidCatalog(format!(
                "id {} の年が範囲外です: {}",
                record.id, record.year
            )));
        }
    }
    Ok(())
}
