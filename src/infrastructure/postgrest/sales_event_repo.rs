// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::client::PostgrestClient;
use crate::domain::models::sales_event::SalesEvent;
use crate::domain::repositories::sales_event_repository::SalesEventRepository;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use reqwest::Method;

const SALES_EVENTS_TABLE: &str = "sales_events";

/// 基于 PostgREST 的销售事件仓库
#[derive(Clone)]
pub struct PostgrestSalesEventRepository {
    client: PostgrestClient,
}

impl PostgrestSalesEventRepository {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SalesEventRepository for PostgrestSalesEventRepository {
    async fn insert(&self, event: &SalesEvent) -> Result<(), RepositoryError> {
        let response = self
            .client
            .request(Method::POST, SALES_EVENTS_TABLE)
            .header("Prefer", "return=minimal")
            .json(event)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(PostgrestClient::error_from_response(response).await)
        }
    }
}
