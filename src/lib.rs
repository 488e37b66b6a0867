// Domain layer modules
pub mod domain;

// アプリケーション層モジュール
pub mod application;

// Infrastructure layer modules
pub mod infrastructure;
