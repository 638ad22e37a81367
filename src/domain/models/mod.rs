// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 店铺（store）：按店铺隔离的密钥与显示名称
/// - 订单（order）：Shopify 推送的订单负载及字段推导
/// - 销售事件（sales_event）：每个订单最多落库一次的规范化记录
pub mod order;
pub mod sales_event;
pub mod store;
