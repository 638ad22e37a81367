// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use serde_json::Value;

/// 唯一会被处理的 Webhook 主题
pub const ORDERS_CREATE_TOPIC: &str = "orders/create";

/// 订单没有可用的商品标题时使用的名称
pub const FALLBACK_PRODUCT_TITLE: &str = "Shopify Order";

/// Shopify 订单负载
///
/// 只声明推导销售事件所需的字段，其余字段被忽略。
/// 字段保持为原始 JSON 值，推导规则在下面的方法中实现。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopifyOrder {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub subtotal_price: Option<Value>,
    #[serde(default)]
    pub line_items: Option<Value>,
}

impl ShopifyOrder {
    /// 从原始请求体解析订单
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// 订单标识符的字符串形式
    ///
    /// 数字按十进制输出（整数值的浮点数不带小数部分），字符串原样返回；
    /// 缺失、空串或其他类型返回 `None`
    pub fn order_id(&self) -> Option<String> {
        match self.id.as_ref()? {
            Value::Number(n) if n.is_f64() => n.as_f64().map(|f| f.to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    /// 订单创建时间，原样透传
    pub fn created_at(&self) -> Option<String> {
        match self.created_at.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// 订单小计金额
    ///
    /// 接受字符串或数字，缺失或无法解析时为 0.0
    pub fn revenue(&self) -> f64 {
        let parsed = match self.subtotal_price.as_ref() {
            Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
            Some(Value::Number(n)) => n.as_f64(),
            _ => None,
        };

        parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    /// 第一个行项目的标题，否则为固定的后备名称
    ///
    /// `line_items` 的形状不符合预期时同样使用后备名称，不会导致解析失败
    pub fn product_title(&self) -> &str {
        self.line_items
            .as_ref()
            .and_then(|items| items.get(0))
            .and_then(|item| item.get("title"))
            .and_then(Value::as_str)
            .unwrap_or(FALLBACK_PRODUCT_TITLE)
    }
}
