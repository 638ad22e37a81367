// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::DbErr;
use thiserror::Error;

pub mod sales_event_repository;
pub mod store_repository;

/// PostgreSQL 唯一约束冲突的错误码
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// HTTP 传输错误
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    /// 远端存储返回的错误
    #[error("Remote store returned {status}: {message}")]
    Remote { status: u16, message: String },
    /// 唯一约束冲突
    #[error("Unique constraint violated: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// 是否为唯一约束冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, RepositoryError::Conflict(_))
    }
}
