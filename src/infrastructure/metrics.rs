// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

/// Webhook 请求计数器名称
pub const WEBHOOK_REQUESTS_TOTAL: &str = "salesrs_webhook_requests_total";

/// 启动 Prometheus 导出器
pub fn init_metrics(listen_addr: &str) {
    let addr: SocketAddr = match listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!("Invalid metrics address {}: {}", listen_addr, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次 Webhook 请求的处理结果
pub fn record_webhook_outcome(outcome: &'static str) {
    metrics::counter!(WEBHOOK_REQUESTS_TOTAL, "outcome" => outcome).increment(1);
}
