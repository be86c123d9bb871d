//! カテゴリフィルタ + テキスト検索
//!
//! 純粋関数のみ。カタログは変更せず、元の並び順を保った部分列を返す。

use crate::types::{FilterState, ProjectRecord, ALL_CATEGORIES};

/// 1件がフィルタ条件に一致するか
///
/// - カテゴリ: `"All"` または完全一致（大文字小文字を区別）
/// - 検索語: 空、またはタイトル/カテゴリに部分一致（大文字小文字を区別しない）
pub fn matches(record: &ProjectRecord, selected_category: &str, search_term: &str) -> bool {
    matches_lowered(record, selected_category, &search_term.to_lowercase())
}

/// `needle` は小文字化済みであること
fn matches_lowered(record: &ProjectRecord, selected_category: &str, needle: &str) -> bool {
    let matches_category = selected_category == ALL_CATEGORIES || record.category == selected_category;
    let matches_search = needle.is_empty()
        || record.title.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle);
    matches_category && matches_search
}

/// カタログを絞り込む
///
/// 一致なしの場合は空のVecを返す。
pub fn filter_catalog<'a>(
    catalog: &'a [ProjectRecord],
    selected_category: &str,
    search_term: &str,
) -> Vec<&'a ProjectRecord> {
    filter_indices(catalog, selected_category, search_term)
        .into_iter()
        .map(|i| &catalog[i])
        .collect()
}

/// 一致したレコードの位置を返す
pub fn filter_indices(catalog: &[ProjectRecord], selected_category: &str, search_term: &str) -> Vec<usize> {
    let needle = search_term.to_lowercase();

    catalog
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_lowered(record, selected_category, &needle))
        .map(|(i, _)| i)
        .collect()
}

/// フィルタ選択肢: `"All"` + カタログに現れるカテゴリ（初出順）
///
/// カタログに存在しないプールのカテゴリは含めない。
pub fn category_options(catalog: &[ProjectRecord]) -> Vec<String> {
    let mut options = vec![ALL_CATEGORIES.to_string()];

    for record in catalog {
        if !options[1..].iter().any(|c| c == &record.category) {
            options.push(record.category.clone());
        }
    }

    options
}

impl FilterState {
    /// 現在の状態でカタログを絞り込む
    pub fn apply<'a>(&self, catalog: &'a [ProjectRecord]) -> Vec<&'a ProjectRecord> {
        filter_catalog(catalog, &self.selected_category, &self.search_term)
    }
}
