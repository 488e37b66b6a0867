/// 問い合わせレコードと送信ペイロード
///
/// リクエストボディのJSONから`ContactSubmission`を取り出し、
/// タイムスタンプを付与して`ContactRecord`を構築する。
use serde::Serialize;
use serde_json::error::Category;
use serde_json::{Map, Value};
use thiserror::Error;

/// ペイロード解析のエラー型
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PayloadError {
    /// JSONとして解析できない
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// 必須フィールドの欠落、または型の不一致
    #[error("Invalid field: {0}")]
    InvalidField(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => PayloadError::InvalidField(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => {
                PayloadError::InvalidJson(err.to_string())
            }
        }
    }
}

/// 問い合わせフォームの送信内容
///
/// `name`、`email`、`msg`の3フィールドは必須で、いずれも文字列であること。
/// それ以外のキーは無視し、重複したキーは後の値を採用する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    /// 送信者名
    pub name: String,
    /// 送信者メールアドレス（形式は検証しない）
    pub email: String,
    /// 問い合わせ本文
    pub msg: String,
}

impl ContactSubmission {
    /// リクエストボディを解析
    pub fn parse(body: &str) -> Result<Self, PayloadError> {
        let mut payload: Map<String, Value> = serde_json::from_str(body)?;

        Ok(Self {
            name: take_string(&mut payload, "name")?,
            email: take_string(&mut payload, "email")?,
            msg: take_string(&mut payload, "msg")?,
        })
    }
}

/// ペイロードから文字列フィールドを取り出す
fn take_string(payload: &mut Map<String, Value>, key: &str) -> Result<String, PayloadError> {
    match payload.remove(key) {
        Some(Value::String(value)) => Ok(value),
        Some(other) => Err(PayloadError::InvalidField(format!(
            "field `{}` is not a string: {}",
            key, other
        ))),
        None => Err(PayloadError::InvalidField(format!("missing field `{}`", key))),
    }
}

/// 永続化される問い合わせレコード
///
/// `timestamp`はハンドラーが生成する主キー。
/// 同じキーのレコードは上書きされる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactRecord {
    /// `YYYY-MM-DD HH:MM:SS`形式のタイムスタンプ
    pub timestamp: String,
    pub name: String,
    pub email: String,
    /// ペイロードの`msg`フィールド
    pub message: String,
}

impl ContactRecord {
    pub fn new(timestamp: String, submission: ContactSubmission) -> Self {
        Self {
            timestamp,
            name: submission.name,
            email: submission.email,
            message: submission.msg,
        }
    }
}
