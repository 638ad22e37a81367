// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::order::ShopifyOrder;
use super::store::Store;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 销售事件实体
///
/// 每个已处理订单对应的规范化记录。`order_id` 在持久化层唯一，
/// 同一订单的重复投递不会产生第二条记录。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesEvent {
    /// 记录唯一标识符
    pub id: Uuid,
    /// 平台订单标识符
    pub order_id: String,
    /// 商品标题
    pub product_title: String,
    /// 商品显示符号
    pub product_symbol: String,
    /// 订单金额
    pub revenue: f64,
    /// 平台给出的订单创建时间，原样保存
    pub created_at: Option<String>,
    /// 所属店铺标识符
    pub store_id: String,
    /// 所属店铺名称
    pub store_name: String,
    /// 本服务接收时间
    pub received_at: DateTime<Utc>,
}

impl SalesEvent {
    /// 由订单负载和店铺记录推导销售事件
    ///
    /// # 参数
    ///
    /// * `order_id` - 已规范化的订单标识符
    /// * `order` - 订单负载
    /// * `store` - 所属店铺
    /// * `product_symbol` - 由符号表解析出的商品符号
    pub fn from_order(
        order_id: String,
        order: &ShopifyOrder,
        store: &Store,
        product_symbol: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            order_id,
            product_title: order.product_title().to_string(),
            product_symbol: product_symbol.to_string(),
            revenue: order.revenue(),
            created_at: order.created_at(),
            store_id: store.id.clone(),
            store_name: store.name.clone(),
            received_at: Utc::now(),
        }
    }
}
