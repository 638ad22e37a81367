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

use crate::domain::models::store::Store;
use crate::domain::repositories::store_repository::StoreRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::store;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 店铺仓库实现
#[derive(Clone)]
pub struct StoreRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl StoreRepositoryImpl {
    /// 创建新的店铺仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StoreRepository for StoreRepositoryImpl {
    async fn find_by_id(&self, id: &str) -> Result<Option<Store>, RepositoryError> {
        let model = store::Entity::find_by_id(id.to_owned())
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }
}

impl From<store::Model> for Store {
    fn from(model: store::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            webhook_secret: model.webhook_secret,
        }
    }
}

impl From<Store> for store::ActiveModel {
    fn from(store: Store) -> Self {
        Self {
            id: Set(store.id),
            name: Set(store.name),
            webhook_secret: Set(store.webhook_secret),
        }
    }
}
