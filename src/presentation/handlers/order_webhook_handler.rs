// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::domain::use_cases::ingest_order::{
    InboundWebhook, IngestError, IngestOrderUseCase, IngestOutcome,
};
use crate::infrastructure::metrics::record_webhook_outcome;
use crate::presentation::errors::AppError;
use axum::{
    extract::Query,
    http::{HeaderMap, StatusCode},
    Extension,
};
use bytes::Bytes;
use serde::Deserialize;
use std::sync::Arc;

/// 主题请求头
pub const TOPIC_HEADER: &str = "x-shopify-topic";
/// 签名请求头
pub const HMAC_HEADER: &str = "x-shopify-hmac-sha256";

#[derive(Debug, Deserialize)]
pub struct WebhookQuery {
    pub store_id: Option<String>,
}

/// 接收 Shopify 订单 Webhook
///
/// 200：主题被忽略或重复订单；201：新事件已记录；
/// 400/401/404/500 见 [`AppError`]
pub async fn receive_order_webhook(
    Extension(use_case): Extension<Arc<IngestOrderUseCase>>,
    Query(query): Query<WebhookQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let webhook = InboundWebhook {
        store_id: query.store_id,
        topic: header_value(&headers, TOPIC_HEADER),
        signature: header_value(&headers, HMAC_HEADER),
        body,
    };

    match use_case.execute(webhook).await {
        Ok(IngestOutcome::Recorded { .. }) => {
            record_webhook_outcome("recorded");
            Ok((StatusCode::CREATED, "Webhook processed successfully."))
        }
        Ok(IngestOutcome::Duplicate { .. }) => {
            record_webhook_outcome("duplicate");
            Ok((StatusCode::OK, "Duplicate order, ignored."))
        }
        Ok(IngestOutcome::Ignored { .. }) => {
            record_webhook_outcome("ignored");
            Ok((StatusCode::OK, "Webhook received, but topic is ignored."))
        }
        Err(e) => {
            record_webhook_outcome(outcome_label(&e));
            Err(e.into())
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn outcome_label(err: &IngestError) -> &'static str {
    match err {
        IngestError::MissingParameter(_) => "missing_parameter",
        IngestError::StoreNotFound(_) => "store_not_found",
        IngestError::SignatureInvalid(_) => "signature_invalid",
        IngestError::MalformedPayload(_) => "malformed_payload",
        IngestError::PersistenceFailure(_) => "persistence_failure",
    }
}
