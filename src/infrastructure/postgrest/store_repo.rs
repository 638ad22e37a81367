// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::client::PostgrestClient;
use crate::domain::models::store::Store;
use crate::domain::repositories::store_repository::StoreRepository;
use crate::domain::repositories::RepositoryError;
use async_trait::async_trait;
use reqwest::Method;

const STORES_TABLE: &str = "stores";

/// 基于 PostgREST 的店铺仓库
#[derive(Clone)]
pub struct PostgrestStoreRepository {
    client: PostgrestClient,
}

impl PostgrestStoreRepository {
    pub fn new(client: PostgrestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StoreRepository for PostgrestStoreRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Store>, RepositoryError> {
        let response = self
            .client
            .request(Method::GET, STORES_TABLE)
            .query(&[
                ("id", format!("eq.{}", id)),
                ("select", "id,name,webhook_secret".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PostgrestClient::error_from_response(response).await);
        }

        let rows: Vec<Store> = response.json().await?;
        Ok(rows.into_iter().next())
    }
}
