//! Portfolio Gallery CLI
//!
//! カタログの生成・絞り込みをコマンドラインから行う

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;
