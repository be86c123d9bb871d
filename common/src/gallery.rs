//! ギャラリー状態
//!
//! カタログとフィルタ状態を保持し、状態が変わったときだけ表示対象を再計算する。
//! 画面側は選択/入力のたびにメソッドを呼び、`visible()` を描画すればよい。

use crate::filter::{category_options, filter_indices};
use crate::summary::ResultSummary;
use crate::types::{Catalog, FilterState, ProjectRecord};

#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    state: FilterState,
    categories: Vec<String>,
    visible: Vec<usize>,
}

impl Gallery {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_state(catalog, FilterState::default())
    }

    pub fn with_state(catalog: Catalog, state: FilterState) -> Self {
        let categories = category_options(&catalog);
        let visible = filter_indices(&catalog, &state.selected_category, &state.search_term);
        Self { catalog, state, categories, visible }
    }

    /// カテゴリタブの選択
    ///
    /// 値が変わったときは `true` を返す。
    pub fn select_category(&mut self, category: impl Into<String>) -> bool {
        let category = category.into();
        if self.state.selected_category == category {
            return false;
        }
        self.state.selected_category = category;
        self.refresh();
        true
    }

    /// 検索欄の入力
    ///
    /// 値が変わったときは `true` を返す。
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if self.state.search_term == term {
            return false;
        }
        self.state.search_term = term;
        self.refresh();
        true
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// フィルタ選択肢（先頭は `"All"`）
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// 表示対象（カタログ順）
    pub fn visible(&self) -> Vec<&ProjectRecord> {
        self.visible.iter().map(|&i| &self.catalog[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn summary(&self) -> ResultSummary {
        ResultSummary::new(self.visible.len(), self.catalog.len())
    }

    fn refresh(&mut self) {
        self.visible = filter_indices(
            &self.catalog,
            &self.state.selected_category,
            &self.state.search_term,
        );
    }
}
