/// 時刻ソース
///
/// 問い合わせレコードのキーとなるタイムスタンプを生成する。
/// テストで決定的な時刻を注入できるようトレイトとして抽象化する。
use chrono::{Local, NaiveDateTime};

/// タイムスタンプのフォーマット（`YYYY-MM-DD HH:MM:SS`）
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 現在時刻を返す時刻ソース
pub trait Clock: Send + Sync {
    /// 現在のローカル日時を取得
    fn now(&self) -> NaiveDateTime;

    /// 現在時刻をレコードキー形式の文字列で取得
    fn timestamp(&self) -> String {
        format_timestamp(&self.now())
    }
}

/// システムのローカル時計を使用する時刻ソース
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 日時をレコードキー形式の文字列に変換
///
/// 秒未満は切り捨てられるため、同一秒内の送信は同じキーになる。
pub fn format_timestamp(date_time: &NaiveDateTime) -> String {
    date_time.format(TIMESTAMP_FORMAT).to_string()
}
