//! カタログ生成に使う固定プール

/// 標準のカタログ件数
pub const DEFAULT_CATALOG_SIZE: usize = 105;

/// 生成件数の上限（idはu32）
pub const MAX_CATALOG_SIZE: usize = u32::MAX as usize;

pub const CATEGORY_POOL: [&str; 7] = [
    "Web Design",
    "Mobile App",
    "Dashboard",
    "E-commerce",
    "Landing Page",
    "SaaS",
    "Branding",
];

pub const NAME_POOL: [&str; 33] = [
    "TaskFlow", "CloudSync", "EcoTracker", "FinanceHub", "HealthCare+", "TravelMate", "FoodieApp",
    "MusicStream", "ChatConnect", "WorkSpace", "ShopEase", "FitTracker", "BookReader", "NewsFlow",
    "WeatherPro", "CalendarApp", "NoteTaker", "PhotoEditor", "VideoCall", "GameCenter", "LearnHub",
    "CryptoWallet", "PodcastApp", "RecipeBook", "EventPlanner", "BudgetTracker", "SocialConnect",
    "MapExplorer", "LanguageApp", "PetCare", "PlantTracker", "MeditationApp", "CodeEditor",
];

/// 背景色（`#`なしの16進）
pub const COLOR_POOL: [&str; 7] = [
    "6366f1", "8b5cf6", "f59e0b", "10b981", "ef4444", "3b82f6", "f97316",
];

pub const YEAR_MIN: u16 = 2020;
pub const YEAR_MAX: u16 = 2024;

/// idから画像パスを組み立てる
pub fn image_path(id: u32) -> String {
    format!("/images/projects/project-{}.jpg", id)
}

/// カテゴリプールに含まれるか
pub fn is_pool_category(category: &str) -> bool {
    CATEGORY_POOL.contains(&category)
}
