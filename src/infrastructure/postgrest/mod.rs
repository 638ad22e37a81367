// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// PostgREST 模块
///
/// 通过 Supabase REST 接口访问 stores 与 sales_events 表
pub mod client;
pub mod sales_event_repo;
pub mod store_repo;
