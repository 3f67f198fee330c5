/*
 * Responsibility
 * - crate の公開モジュール定義
 * - bin (main.rs) / token-gen / tests/ から同じ実装を参照するための入口
 */
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;
