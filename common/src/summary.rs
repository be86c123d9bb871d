//! 件数表示と結果なし表示

use std::fmt;

/// 一致なしのときの見出し
pub const EMPTY_TITLE: &str = "No projects found";
/// 一致なしのときの案内文
pub const EMPTY_HINT: &str = "Try adjusting your search or filter criteria";

/// 表示件数 / 全件数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultSummary {
    pub shown: usize,
    pub total: usize,
}

impl ResultSummary {
    pub fn new(shown: usize, total: usize) -> Self {
        Self { shown, total }
    }

    pub fn is_empty(&self) -> bool {
        self.shown == 0
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} projects", self.shown, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ResultSummary::new(12, 105).to_string(), "Showing 12 of 105 projects");
    }

    #[test]
    fn test_is_empty() {
        assert!(ResultSummary::new(0, 105).is_empty());
        assert!(!ResultSummary::new(1, 105).is_empty());
    }
}
