// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：店铺、销售事件和 Shopify 订单负载
/// - 仓库接口（repositories）：店铺查询与销售事件写入的抽象接口
/// - 服务（services）：签名校验和商品符号表
/// - 用例（use_cases）：订单 Webhook 接收流程
///
/// 领域层不依赖于具体的持久化实现。
pub mod models;
pub mod repositories;
pub mod services;
pub mod use_cases;
