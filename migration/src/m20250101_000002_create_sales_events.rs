// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

/// 创建销售事件表
///
/// `order_id` 上的唯一索引是重复投递去重的唯一依据
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SalesEvents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SalesEvents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SalesEvents::OrderId).string().not_null())
                    .col(ColumnDef::new(SalesEvents::ProductTitle).string().not_null())
                    .col(ColumnDef::new(SalesEvents::ProductSymbol).string().not_null())
                    .col(
                        ColumnDef::new(SalesEvents::Revenue)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(ColumnDef::new(SalesEvents::CreatedAt).string().null())
                    .col(ColumnDef::new(SalesEvents::StoreId).string().not_null())
                    .col(ColumnDef::new(SalesEvents::StoreName).string().not_null())
                    .col(
                        ColumnDef::new(SalesEvents::ReceivedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sales_events_order_id")
                    .table(SalesEvents::Table)
                    .col(SalesEvents::OrderId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_sales_events_store_id")
                    .table(SalesEvents::Table)
                    .col(SalesEvents::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SalesEvents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SalesEvents {
    Table,
    Id,
    OrderId,
    ProductTitle,
    ProductSymbol,
    Revenue,
    CreatedAt,
    StoreId,
    StoreName,
    ReceivedAt,
}
