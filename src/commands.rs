//! サブコマンドの処理
//!
//! 出力文字列を組み立てて返し、表示はmain側で行う。

use crate::cli::CatalogSource;
use crate::config::Config;
use crate::error::Result;
use crate::store;
use portfolio_common::{
    generate_catalog, generate_catalog_seeded, Catalog, Gallery, ProjectRecord, EMPTY_HINT,
    EMPTY_TITLE, MAX_CATALOG_SIZE,
};
use tracing::{debug, info, warn};

/// 件数を生成可能な範囲に丸める
///
/// 負数は空カタログ、上限超過は `MAX_CATALOG_SIZE` 件として扱う。
pub fn clamp_count(count: i64) -> usize {
    if count < 0 {
        warn!(count, "件数が負のため0件として扱います");
        return 0;
    }

    match u32::try_from(count) {
        Ok(count) => count as usize,
        Err(_) => {
            warn!(count, max = MAX_CATALOG_SIZE, "件数が上限を超えるため上限まで生成します");
            MAX_CATALOG_SIZE
        }
    }
}

/// 件数とシードからカタログを生成
///
/// シードがなければOSの乱数で生成するため、実行ごとに結果が変わる。
pub fn build_catalog(count: Option<i64>, seed: Option<u64>, config: &Config) -> Result<Catalog> {
    let count = count.map(clamp_count).unwrap_or(config.catalog_count);
    let seed = match seed {
        Some(seed) => Some(seed),
        None => config.effective_seed()?,
    };

    let catalog = match seed {
        Some(seed) => {
            debug!(count, seed, "シード固定で生成");
            generate_catalog_seeded(count, seed)
        }
        None => {
            debug!(count, "ランダムに生成");
            generate_catalog(count)
        }
    };
    info!(records = catalog.len(), "カタログ生成完了");
    Ok(catalog)
}

/// ファイル指定があれば読み込み、なければ生成
pub fn resolve_catalog(source: &CatalogSource, config: &Config) -> Result<Catalog> {
    match &source.input {
        Some(path) => store::load_catalog(path),
        None => build_catalog(source.count, source.seed, config),
    }
}

/// 1件を1行で表示
pub fn format_record(record: &ProjectRecord) -> String {
    format!("#{:<4} {} [{}] {}", record.id, record.title, record.category, record.year)
}

/// 絞り込み結果のテキスト表示
pub fn render_filter(gallery: &Gallery) -> String {
    let mut lines = vec![gallery.summary().to_string()];

    if gallery.summary().is_empty() {
        lines.push(String::new());
        lines.push(EMPTY_TITLE.to_string());
        lines.push(EMPTY_HINT.to_string());
    } else {
        lines.extend(gallery.visible().into_iter().map(format_record));
    }

    lines.join("\n")
}

/// 絞り込み結果のJSON表示
pub fn render_filter_json(gallery: &Gallery) -> Result<String> {
    Ok(serde_json::to_string_pretty(&gallery.visible())?)
}

/// フィルタ選択肢の表示（選択中には `*`）
pub fn render_categories(gallery: &Gallery) -> String {
    gallery
        .categories()
        .iter()
        .map(|c| {
            let marker = if *c == gallery.state().selected_category { "*" } else { " " };
            format!("{} {}", marker, c)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 設定の表示
pub fn render_config(config: &Config) -> Result<String> {
    let seed = match config.effective_seed()? {
        Some(seed) => seed.to_string(),
        None => "未設定（毎回ランダム）".to_string(),
    };
    Ok(format!(
        "設定:\n  生成件数: {}\n  シード: {}",
        config.catalog_count, seed
    ))
}
