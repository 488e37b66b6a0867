// アプリケーション層モジュール
pub mod contact_response;
pub mod submission_handler;

// 再エクスポート
pub use contact_response::{
    build_cors_headers, failure_response, success_response, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use submission_handler::{SubmissionError, SubmissionHandler};
