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

use crate::domain::use_cases::ingest_order::IngestError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<IngestError>() {
            Some(IngestError::MissingParameter(_)) => StatusCode::BAD_REQUEST,
            Some(IngestError::MalformedPayload(_)) => StatusCode::BAD_REQUEST,
            Some(IngestError::SignatureInvalid(_)) => StatusCode::UNAUTHORIZED,
            Some(IngestError::StoreNotFound(_)) => StatusCode::NOT_FOUND,
            Some(IngestError::PersistenceFailure(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
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
