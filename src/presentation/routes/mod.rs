// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::use_cases::ingest_order::IngestOrderUseCase;
use crate::presentation::handlers::order_webhook_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 订单 Webhook 路径
pub const ORDER_WEBHOOK_PATH: &str = "/v1/webhooks/shopify/orders";

/// 创建应用路由
///
/// # 返回值
///
/// 返回未注入依赖的路由
pub fn routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route(
            ORDER_WEBHOOK_PATH,
            post(order_webhook_handler::receive_order_webhook),
        )
}

/// 创建完整应用
///
/// 注入接收用例并附加请求追踪层
pub fn app(use_case: Arc<IngestOrderUseCase>) -> Router {
    routes()
        .layer(Extension(use_case))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
