// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// 店铺实体
///
/// 由不透明的店铺标识符确定，保存该店铺的 Webhook 共享密钥和显示名称。
/// 本服务只读取店铺记录，从不修改。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// 店铺标识符
    pub id: String,
    /// 显示名称
    pub name: String,
    /// Webhook 签名密钥
    ///
    /// 缺失或为 null 时为空串，签名校验会以缺少密钥拒绝
    #[serde(default, deserialize_with = "null_as_empty")]
    pub webhook_secret: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("webhook_secret", &"[REDACTED]")
            .finish()
    }
}
