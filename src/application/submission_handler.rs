/// 問い合わせ送信ハンドラー
///
/// リクエストボディを解析してタイムスタンプ付きのレコードを保存し、
/// 結果を成功・失敗の固定レスポンスに変換する。
use lambda_http::{Body, Request, Response};
use thiserror::Error;
use tracing::{info, warn};

use crate::application::contact_response::{failure_response, success_response};
use crate::domain::{Clock, ContactRecord, ContactSubmission, PayloadError};
use crate::infrastructure::{ContactRepository, RepositoryError};

/// 送信処理のエラー型
///
/// 呼び出し元にはすべて同じ失敗レスポンスとして返す。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmissionError {
    /// リクエストボディが空、またはUTF-8でない
    #[error("Request body is empty or not UTF-8")]
    EmptyBody,

    /// ペイロードの解析に失敗
    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    /// リポジトリ操作エラー
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// 問い合わせ送信リクエストを処理するハンドラー
///
/// 保存先と時刻ソースは外部から注入する。
pub struct SubmissionHandler<CR, C>
where
    CR: ContactRepository,
    C: Clock,
{
    /// 問い合わせリポジトリ
    contact_repo: CR,
    /// タイムスタンプ生成用の時刻ソース
    clock: C,
}

impl<CR, C> SubmissionHandler<CR, C>
where
    CR: ContactRepository,
    C: Clock,
{
    /// 新しいSubmissionHandlerを作成
    pub fn new(contact_repo: CR, clock: C) -> Self {
        Self {
            contact_repo,
            clock,
        }
    }

    /// 送信内容を保存
    ///
    /// # 処理フロー
    /// 1. 時刻ソースからタイムスタンプを生成
    /// 2. ボディをJSONとして解析
    /// 3. レコードを構築してリポジトリに保存
    ///
    /// 解析に失敗した場合は保存を行わない。
    pub async fn submit(&self, body: Option<&str>) -> Result<ContactRecord, SubmissionError> {
        let timestamp = self.clock.timestamp();

        let body = body.ok_or(SubmissionError::EmptyBody)?;
        let submission = ContactSubmission::parse(body)?;

        let record = ContactRecord::new(timestamp, submission);
        self.contact_repo.put(&record).await?;

        Ok(record)
    }

    /// HTTPリクエストを処理してレスポンスを生成
    ///
    /// エラーは返さず、失敗時も必ずCORSヘッダー付きの400レスポンスを返す。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        match self.submit(Self::body_text(request.body())).await {
            Ok(record) => {
                info!(timestamp = %record.timestamp, "問い合わせを保存");
                success_response()
            }
            Err(err) => {
                warn!(reason = %err, "問い合わせの保存に失敗");
                failure_response()
            }
        }
    }

    /// リクエストボディを文字列として取り出す
    ///
    /// Base64エンコードされたボディはlambda_httpによりBinaryとして渡される。
    fn body_text(body: &Body) -> Option<&str> {
        match body {
            Body::Text(text) => Some(text.as_str()),
            Body::Binary(bytes) => std::str::from_utf8(bytes).ok(),
            _ => None,
        }
    }
}
