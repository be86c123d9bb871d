//! カタログ生成
//!
//! 各idごとにカテゴリ・名前・色を固定プールから独立に一様抽選する。
//! テストでは乱数源を差し替えて再現可能にする。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::pools::{
    image_path, CATEGORY_POOL, COLOR_POOL, MAX_CATALOG_SIZE, NAME_POOL, YEAR_MAX, YEAR_MIN,
};
use crate::types::{Catalog, ProjectRecord};

/// 事前確保する件数の上限
const PREALLOC_LIMIT: usize = 4096;

/// 件数を生成可能な範囲に丸める
///
/// `MAX_CATALOG_SIZE` を超える件数は上限まで生成する。
pub fn capped_count(count: usize) -> usize {
    count.min(MAX_CATALOG_SIZE)
}

/// 乱数源を指定してカタログを生成
///
/// `count == 0` なら空のカタログを返す。
pub fn generate_catalog_with<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Catalog {
    let count = capped_count(count);
    let mut records = Vec::with_capacity(count.min(PREALLOC_LIMIT));

    for id in 1..=count as u32 {
        let category = pick(&CATEGORY_POOL, rng);
        let name = pick(&NAME_POOL, rng);
        let color = pick(&COLOR_POOL, rng);

        records.push(ProjectRecord {
            id,
            title: format!("{} {}", name, id),
            category: category.to_string(),
            image: image_path(id),
            color: color.to_string(),
            year: rng.gen_range(YEAR_MIN..=YEAR_MAX),
        });
    }

    Catalog::from(records)
}

/// シード固定でカタログを生成（同じシードなら同じ結果）
pub fn generate_catalog_seeded(count: usize, seed: u64) -> Catalog {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_catalog_with(count, &mut rng)
}

/// OSの乱数でカタログを生成
///
/// 呼ぶたびに別のカタログになる（非決定的）。
/// 再現性が必要な場合は [`generate_catalog_seeded`] を使う。
#[cfg(feature = "os-rng")]
pub fn generate_catalog(count: usize) -> Catalog {
    generate_catalog_with(count, &mut rand::thread_rng())
}

fn pick<'a, R: Rng + ?Sized>(pool: &[&'a str], rng: &mut R) -> &'a str {
    pool[rng.gen_range(0..pool.len())]
}
