//! ギャラリーの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ProjectRecord: 1件のプロジェクト
//! - Catalog: 生成済みプロジェクトの一覧（生成後は不変）
//! - FilterState: 選択カテゴリと検索語

use serde::{Deserialize, Serialize};

/// 全カテゴリを表すフィルタ値
pub const ALL_CATEGORIES: &str = "All";

/// プロジェクト1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub category: String,
    /// 画像パス（idから決まる）
    pub image: String,
    /// 代替画像の背景色（先頭の`#`なし）
    pub color: String,
    pub year: u16,
}

/// 生成済みのプロジェクト一覧
///
/// 並び順はid順のまま保持し、生成後に変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog(Vec<ProjectRecord>);

impl Catalog {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectRecord> {
        self.0.iter()
    }
}

impl From<Vec<ProjectRecord>> for Catalog {
    fn from(records: Vec<ProjectRecord>) -> Self {
        Self(records)
    }
}

impl std::ops::Deref for Catalog {
    type Target = [ProjectRecord];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// フィルタ状態（選択カテゴリ + 検索語）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// `"All"` またはカテゴリ名（大文字小文字を区別）
    pub selected_category: String,
    /// 自由入力（大文字小文字を区別しない）
    pub search_term: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            search_term: String::new(),
        }
    }
}

impl FilterState {
    pub fn new(selected_category: impl Into<String>, search_term: impl Into<String>) -> Self {
        Self {
            selected_category: selected_category.into(),
            search_term: search_term.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProjectRecord {
        ProjectRecord {
            id: 7,
            title: "NewsFlow 7".to_string(),
            category: "SaaS".to_string(),
            image: "/images/projects/project-7.jpg".to_string(),
            color: "10b981".to_string(),
            year: 2022,
        }
    }

    #[test]
    fn test_filter_state_default() {
        let state = FilterState::default();
        assert_eq!(state.selected_category, "All");
        assert_eq!(state.search_term, "");
    }

    #[test]
    fn test_filter_state_new() {
        let state = FilterState::new("SaaS", "flow");
        assert_eq!(state.selected_category, "SaaS");
        assert_eq!(state.search_term, "flow");
    }

    #[test]
    fn test_project_record_serialize() {
        let json = serde_json::to_string(&sample()).expect("シリアライズ失敗");
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"title\":\"NewsFlow 7\""));
        assert!(json.contains("\"color\":\"10b981\""));
    }

    #[test]
    fn test_catalog_serializes_as_array() {
        let catalog = Catalog::from(vec![sample()]);
        let json = serde_json::to_string(&catalog).expect("シリアライズ失敗");
        assert!(json.starts_with('['));

        let restored: Catalog = serde_json::from_str(&json).expect("デシリアライズ失敗");
        assert_eq!(restored.len(), 1);
        assert_eq!(restored[0].title, "NewsFlow 7");
    }

    #[test]
    fn test_filter_state_deserialize() {
        let json = r#"{"selectedCategory": "Branding", "searchTerm": "pet"}"#;
        let state: FilterState = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(state.selected_category, "Branding");
        assert_eq!(state.search_term, "pet");
    }
}
