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

use crate::domain::models::sales_event::SalesEvent;
use crate::domain::repositories::sales_event_repository::SalesEventRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::sales_event;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;

/// 销售事件仓库实现
#[derive(Clone)]
pub struct SalesEventRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SalesEventRepositoryImpl {
    /// 创建新的销售事件仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// 根据订单ID查找销售事件
    pub async fn find_by_order_id(
        &self,
        order_id: &str,
    ) -> Result<Option<SalesEvent>, RepositoryError> {
        let model = sales_event::Entity::find()
            .filter(sales_event::Column::OrderId.eq(order_id))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    /// 统计某个订单ID的记录数
    pub async fn count_by_order_id(&self, order_id: &str) -> Result<u64, RepositoryError> {
        let count = sales_event::Entity::find()
            .filter(sales_event::Column::OrderId.eq(order_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl SalesEventRepository for SalesEventRepositoryImpl {
    async fn insert(&self, event: &SalesEvent) -> Result<(), RepositoryError> {
        let active_model: sales_event::ActiveModel = event.clone().into();

        match sales_event::Entity::insert(active_model)
            .exec_without_returning(self.db.as_ref())
            .await
        {
            Ok(_) => Ok(()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    Err(RepositoryError::Conflict(detail))
                }
                _ => Err(err.into()),
            },
        }
    }
}

impl From<sales_event::Model> for SalesEvent {
    fn from(model: sales_event::Model) -> Self {
        Self {
            id: model.id,
            order_id: model.order_id,
            product_title: model.product_title,
            product_symbol: model.product_symbol,
            revenue: model.revenue,
            created_at: model.created_at,
            store_id: model.store_id,
            store_name: model.store_name,
            received_at: model.received_at.into(),
        }
    }
}

impl From<SalesEvent> for sales_event::ActiveModel {
    fn from(event: SalesEvent) -> Self {
        Self {
            id: Set(event.id),
            order_id: Set(event.order_id),
            product_title: Set(event.product_title),
            product_symbol: Set(event.product_symbol),
            revenue: Set(event.revenue),
            created_at: Set(event.created_at),
            store_id: Set(event.store_id),
            store_name: Set(event.store_name),
            received_at: Set(event.received_at.into()),
        }
    }
}
