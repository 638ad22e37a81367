// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::order::{ShopifyOrder, ORDERS_CREATE_TOPIC};
use crate::domain::models::sales_event::SalesEvent;
use crate::domain::repositories::sales_event_repository::SalesEventRepository;
use crate::domain::repositories::store_repository::StoreRepository;
use crate::domain::repositories::RepositoryError;
use crate::domain::services::signature_service::{self, SignatureError};
use crate::domain::services::symbol_table::SymbolTable;
use bytes::Bytes;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, instrument, warn};

/// 接收到的 Webhook 请求
///
/// 与传输层无关；请求体在构造前只读取一次
#[derive(Debug, Clone, Default)]
pub struct InboundWebhook {
    /// 查询参数中的店铺标识符
    pub store_id: Option<String>,
    /// 主题请求头
    pub topic: Option<String>,
    /// 签名请求头
    pub signature: Option<String>,
    /// 原始请求体
    pub body: Bytes,
}

/// 处理成功的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    /// 新的销售事件已写入
    Recorded { order_id: String },
    /// 重复投递，记录已存在
    Duplicate { order_id: String },
    /// 不处理的主题
    Ignored { topic: String },
}

/// 接收流程的错误
///
/// 每个变体对应一个 HTTP 状态码，均终止当前请求
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Store not found: {0}")]
    StoreNotFound(String),
    #[error("Invalid HMAC signature: {0}")]
    SignatureInvalid(#[from] SignatureError),
    #[error("Invalid request body: {0}")]
    MalformedPayload(String),
    #[error("Failed to record sales event: {0}")]
    PersistenceFailure(#[source] RepositoryError),
}

/// 订单 Webhook 接收用例
///
/// 依次执行：店铺标识校验、店铺查询、签名校验、主题过滤、
/// 负载解析与字段推导、单次写入。唯一约束冲突视为重复投递并按成功处理。
pub struct IngestOrderUseCase {
    stores: Arc<dyn StoreRepository>,
    events: Arc<dyn SalesEventRepository>,
    symbols: SymbolTable,
}

impl IngestOrderUseCase {
    pub fn new(
        stores: Arc<dyn StoreRepository>,
        events: Arc<dyn SalesEventRepository>,
        symbols: SymbolTable,
    ) -> Self {
        Self {
            stores,
            events,
            symbols,
        }
    }

    #[instrument(
        name = "ingest_order",
        skip(self, webhook),
        fields(
            store_id = webhook.store_id.as_deref().unwrap_or("none"),
            topic = webhook.topic.as_deref().unwrap_or("none"),
        )
    )]
    pub async fn execute(&self, webhook: InboundWebhook) -> Result<IngestOutcome, IngestError> {
        let store_id = match webhook.store_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => {
                warn!("Rejecting webhook without store_id");
                return Err(IngestError::MissingParameter("store_id"));
            }
        };

        let store = match self.stores.find_by_id(store_id).await {
            Ok(Some(store)) => store,
            Ok(None) => {
                warn!("Store not found");
                return Err(IngestError::StoreNotFound(store_id.to_string()));
            }
            Err(e) => {
                error!("Store lookup failed: {}", e);
                return Err(IngestError::StoreNotFound(store_id.to_string()));
            }
        };

        if let Err(e) = signature_service::verify(
            &store.webhook_secret,
            &webhook.body,
            webhook.signature.as_deref(),
        ) {
            error!("Invalid HMAC signature: {}", e);
            return Err(e.into());
        }

        let topic = webhook.topic.unwrap_or_default();
        if topic != ORDERS_CREATE_TOPIC {
            info!("Ignoring topic: {}", topic);
            return Ok(IngestOutcome::Ignored { topic });
        }

        let order = ShopifyOrder::from_slice(&webhook.body).map_err(|e| {
            error!("Error parsing webhook body: {}", e);
            IngestError::MalformedPayload(e.to_string())
        })?;

        let order_id = order.order_id().ok_or_else(|| {
            error!("Order payload has no usable id");
            IngestError::MalformedPayload("order id missing".to_string())
        })?;

        let symbol = self.symbols.resolve(order.product_title());
        let event = SalesEvent::from_order(order_id, &order, &store, symbol);

        match self.events.insert(&event).await {
            Ok(()) => {
                info!(order_id = %event.order_id, "Successfully processed order");
                Ok(IngestOutcome::Recorded {
                    order_id: event.order_id,
                })
            }
            Err(e) if e.is_conflict() => {
                info!(order_id = %event.order_id, "Duplicate order ignored");
                Ok(IngestOutcome::Duplicate {
                    order_id: event.order_id,
                })
            }
            Err(e) => {
                error!(order_id = %event.order_id, "Sales event insert failed: {}", e);
                Err(IngestError::PersistenceFailure(e))
            }
        }
    }
}
