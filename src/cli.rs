use clap::{Args, Parser, Subcommand};
use portfolio_common::ALL_CATEGORIES;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio-gallery")]
#[command(about = "ポートフォリオのプロジェクトカタログを生成・絞り込み", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// カタログを生成してJSONを出力
    Generate {
        /// 生成件数（省略時は設定値）
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        count: Option<i64>,

        /// 乱数シード（省略時は設定値、未設定ならランダム）
        #[arg(short, long)]
        seed: Option<u64>,

        /// 出力JSONファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// カテゴリと検索語でカタログを絞り込む
    Filter {
        #[command(flatten)]
        source: CatalogSource,

        /// カテゴリ（"All" で全カテゴリ）
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// 検索語（タイトル/カテゴリに部分一致、大文字小文字を区別しない）
        #[arg(short = 'q', long, default_value = "")]
        search: String,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,
    },

    /// フィルタの選択肢を表示
    Categories {
        #[command(flatten)]
        source: CatalogSource,
    },

    /// 設定を表示/編集
    Config {
        /// 生成件数を設定
        #[arg(long)]
        set_count: Option<usize>,

        /// 固定シードを設定
        #[arg(long)]
        set_seed: Option<u64>,

        /// 固定シードを解除
        #[arg(long, conflicts_with = "set_seed")]
        clear_seed: bool,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 絞り込み対象のカタログ（ファイル or その場で生成）
#[derive(Args, Clone, Debug, Default)]
pub struct CatalogSource {
    /// 生成済みカタログJSON
    #[arg(short, long, conflicts_with_all = ["count", "seed"])]
    pub input: Option<PathBuf>,

    /// 生成件数（省略時は設定値）
    #[arg(short = 'n', long, allow_hyphen_values = true)]
    pub count: Option<i64>,

    /// 乱数シード
    #[arg(short, long)]
    pub seed: Option<u64>,
}
