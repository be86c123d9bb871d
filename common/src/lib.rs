//! Portfolio Gallery Common Library
//!
//! CLIとWeb(WASM)で共有される型・カタログ生成・フィルタ

pub mod types;
pub mod pools;
pub mod catalog;
pub mod filter;
pub mod gallery;
pub mod summary;
pub mod placeholder;

pub use types::{Catalog, FilterState, ProjectRecord, ALL_CATEGORIES};
pub use pools::{
    is_pool_category, CATEGORY_POOL, COLOR_POOL, DEFAULT_CATALOG_SIZE, MAX_CATALOG_SIZE, NAME_POOL, YEAR_MAX, YEAR_MIN,
};
#[cfg(feature = "os-rng")]
pub use catalog::generate_catalog;
pub use catalog::{capped_count, generate_catalog_seeded, generate_catalog_with};
pub use filter::{category_options, filter_catalog, matches};
pub use gallery::Gallery;
pub use summary::{ResultSummary, EMPTY_HINT, EMPTY_TITLE};
pub use placeholder::{placeholder_data_uri, placeholder_svg};
