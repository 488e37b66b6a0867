/// 構造化ログの初期化
///
/// CloudWatch向けにイベントをフラットなJSONで出力する。
/// ログレベルは`RUST_LOG`で指定し、未設定または不正な値ならデフォルトを使う。
use std::sync::Once;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// 本番用のデフォルトログレベル
const DEFAULT_DIRECTIVES: &str = "info";

/// Lambda向けのログサブスクライバーを初期化する
///
/// 2回目以降の呼び出しや、既にサブスクライバーが設定済みの場合は何もしない。
pub fn init_logging() {
    INIT.call_once(|| {
        let json_layer = tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false);

        let _ = tracing_subscriber::registry()
            .with(env_filter(std::env::var("RUST_LOG").ok(), DEFAULT_DIRECTIVES))
            .with(json_layer)
            .try_init();
    });
}

/// テスト用のログサブスクライバーを初期化する（人間が読みやすい形式）
#[cfg(test)]
pub fn init_test_logging() {
    static TEST_INIT: Once = Once::new();

    TEST_INIT.call_once(|| {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .compact();

        let _ = tracing_subscriber::registry()
            .with(env_filter(std::env::var("RUST_LOG").ok(), "debug"))
            .with(fmt_layer)
            .try_init();
    });
}

/// ログレベルのフィルターを構築
///
/// `directives`が空または解析できない場合は`default`を使う。
fn env_filter(directives: Option<String>, default: &str) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default))
}
