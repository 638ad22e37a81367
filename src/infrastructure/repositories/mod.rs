// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 基于 SeaORM 直接访问数据库的领域仓库实现
pub mod sales_event_repo_impl;
pub mod store_repo_impl;
