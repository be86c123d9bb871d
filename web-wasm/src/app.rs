//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{header::Header, project_gallery::ProjectGallery};
use portfolio_common::{generate_catalog_seeded, Catalog, DEFAULT_CATALOG_SIZE};

/// ページ読み込みごとのシード
///
/// 読み込みのたびに別のカタログになる。
fn page_seed() -> u64 {
    let random = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now = js_sys::Date::now() as u64;
    (now << 32) ^ random
}

fn load_catalog() -> Catalog {
    let seed = page_seed();
    let catalog = generate_catalog_seeded(DEFAULT_CATALOG_SIZE, seed);
    web_sys::console::log_1(
        &format!("catalog generated: {} projects (seed {})", catalog.len(), seed).into(),
    );
    catalog
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let catalog = load_catalog();

    view! {
        <div class="container">
            <Header />
            <ProjectGallery catalog=catalog />
        </div>
    }
}
