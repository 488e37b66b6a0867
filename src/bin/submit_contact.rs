/// 問い合わせフォーム送信 HTTP Lambdaエントリポイント
///
/// API Gateway / Lambda Function URL経由のPOSTリクエストを受け取り、
/// 送信内容をDynamoDBの問い合わせテーブルに保存する。
use contact_form::application::SubmissionHandler;
use contact_form::domain::SystemClock;
use contact_form::infrastructure::{init_logging, ContactTableConfig, DynamoContactRepository};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use tokio::sync::OnceCell;
use tracing::info;

/// DynamoContactRepositoryの静的インスタンス
///
/// Lambda warm start時にクライアントを再利用するため、
/// 一度初期化したリポジトリを静的に保持する。
static CONTACT_REPO: OnceCell<DynamoContactRepository> = OnceCell::const_new();

/// DynamoContactRepositoryを取得（初期化されていなければ初期化）
async fn get_contact_repo() -> &'static DynamoContactRepository {
    CONTACT_REPO
        .get_or_init(|| async {
            let config = ContactTableConfig::from_env().await;
            info!(table_name = config.table_name(), "問い合わせテーブルに接続");
            DynamoContactRepository::new(config.client().clone(), config.table_name().to_string())
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("問い合わせ送信Lambda関数を初期化");

    run(service_fn(handler)).await
}

/// HTTPリクエストハンドラー
///
/// 失敗時もエラーを返さず、CORSヘッダー付きの400レスポンスを返す。
async fn handler(request: Request) -> Result<Response<Body>, Error> {
    let submission_handler = SubmissionHandler::new(get_contact_repo().await.clone(), SystemClock);

    Ok(submission_handler.handle(&request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http::Request as HttpRequest;

    /// 不正なボディはDynamoDBに書き込まずCORSヘッダー付きの400を返す
    #[tokio::test]
    async fn test_handler_returns_400_for_invalid_body() {
        init_logging();

        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from("not json"))
            .unwrap();

        let response = handler(request).await.unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
        assert_eq!(
            response
                .headers()
                .get("access-control-allow-credentials")
                .unwrap(),
            "true"
        );
    }
}
