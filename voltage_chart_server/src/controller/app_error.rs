use crate::common::*;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[doc = "HTTP 경계에서 사용하는 오류 타입. 상세 내용은 로그로만 남기고 응답은 일반 메시지로 내려준다."]
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, "NOT_FOUND"),
            AppError::Internal(e) => {
                error!("{:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_ERROR",
                )
            }
        };

        let body: Json<Value> = Json(json!({
            "error": code,
            "message": error_message
        }));

        (status, body).into_response()
    }
}
