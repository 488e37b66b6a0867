/// 問い合わせ送信のレスポンス生成
///
/// 成功・失敗の2種類の固定レスポンスを構築する。
/// どちらもJSON文字列のボディと同じCORSヘッダーを持つ。
use lambda_http::http::header::{
    HeaderMap, HeaderValue, ACCESS_CONTROL_ALLOW_CREDENTIALS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};

/// 保存成功時のメッセージ
pub const SUCCESS_MESSAGE: &str = "Successfully saved contact info!";

/// 保存失敗時のメッセージ
pub const FAILURE_MESSAGE: &str = "Error saving contact info";

/// 保存成功レスポンス（HTTP 200）
pub fn success_response() -> Response<Body> {
    build_response(StatusCode::OK, SUCCESS_MESSAGE)
}

/// 保存失敗レスポンス（HTTP 400）
///
/// 失敗理由は含めない。
pub fn failure_response() -> Response<Body> {
    build_response(StatusCode::BAD_REQUEST, FAILURE_MESSAGE)
}

/// CORSヘッダーを生成
///
/// - Access-Control-Allow-Origin: *
/// - Access-Control-Allow-Credentials: true
/// - Content-Type: application/json
pub fn build_cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();

    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    headers
}

fn build_response(status: StatusCode, message: &str) -> Response<Body> {
    // 文字列のJSONエンコードは失敗しない
    let body = serde_json::Value::from(message).to_string();

    let mut response = Response::new(Body::Text(body));
    *response.status_mut() = status;
    *response.headers_mut() = build_cors_headers();

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            Body::Binary(bytes) => String::from_utf8(bytes.clone()).unwrap(),
            Body::Empty => String::new(),
            _ => panic!("予期しないBody型"),
        }
    }

    #[test]
    fn test_success_response_status_and_body() {
        let response = success_response();

        assert_eq!(response.status(), 200);
        assert_eq!(body_text(&response), "\"Successfully saved contact info!\"");
    }

    #[test]
    fn test_failure_response_status_and_body() {
        let response = failure_response();

        assert_eq!(response.status(), 400);
        assert_eq!(body_text(&response), "\"Error saving contact info\"");
    }

    #[test]
    fn test_response_bodies_are_json_strings() {
        let success: String = serde_json::from_str(&body_text(&success_response())).unwrap();
        let failure: String = serde_json::from_str(&body_text(&failure_response())).unwrap();

        assert_eq!(success, SUCCESS_MESSAGE);
        assert_eq!(failure, FAILURE_MESSAGE);
    }

    #[test]
    fn test_both_responses_have_cors_headers() {
        for response in [success_response(), failure_response()] {
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

    #[test]
    fn test_build_cors_headers_contains_all_headers() {
        let headers = build_cors_headers();

        assert_eq!(headers.len(), 3);
        assert_eq!(
            headers.get("content-type").map(|v| v.to_str().unwrap()),
            Some("application/json")
        );
    }
}
