// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::sales_event::SalesEvent;
use async_trait::async_trait;

/// 销售事件仓库特质
#[async_trait]
pub trait SalesEventRepository: Send + Sync {
    /// 插入销售事件
    ///
    /// 同一 `order_id` 已存在时必须返回 [`RepositoryError::Conflict`]
    async fn insert(&self, event: &SalesEvent) -> Result<(), RepositoryError>;
}
