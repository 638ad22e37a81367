// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::store::Store;
use async_trait::async_trait;

/// 店铺仓库特质
///
/// 只读：按店铺标识符查询密钥和显示名称
#[async_trait]
pub trait StoreRepository: Send + Sync {
    /// 根据ID查找店铺
    async fn find_by_id(&self, id: &str) -> Result<Option<Store>, RepositoryError>;
}
