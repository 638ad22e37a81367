// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 该模块包含系统的技术实现细节，负责与外部系统交互：
/// - 数据库（database）：连接池和 SeaORM 实体映射
/// - 指标（metrics）：Prometheus 导出器和请求计数
/// - PostgREST（postgrest）：Supabase REST 接口客户端及其仓库实现
/// - 仓库实现（repositories）：基于 SeaORM 的领域仓库接口实现
///
/// 基础设施层依赖于领域层的抽象接口，两种持久化后端可以互换。
pub mod database;
pub mod metrics;
pub mod postgrest;
pub mod repositories;
