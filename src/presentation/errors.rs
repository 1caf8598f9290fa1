// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::repositories::product_repository::RepositoryError;

/// 校验失败消息中出现的关键词，命中即按错误请求处理
const VALIDATION_KEYWORDS: [&str; 4] = ["cannot be empty", "invalid", "required", "validation"];

/// 应用错误类型
///
/// 处理器返回的统一错误包装。仓库错误映射到对应的HTTP状态码，
/// 其余错误按消息内容区分校验失败与内部错误，响应体一律为
/// `{"error": <消息>}`。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status_code(&self) -> StatusCode {
        if let Some(repo_err) = self.0.downcast_ref::<RepositoryError>() {
            return match repo_err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
        }

        let message = self.0.to_string();
        if VALIDATION_KEYWORDS.iter().any(|k| message.contains(k)) {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
