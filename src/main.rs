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

use migration::{Migrator, MigratorTrait};
use salesrs::config::settings::{PersistenceBackend, Settings};
use salesrs::domain::repositories::sales_event_repository::SalesEventRepository;
use salesrs::domain::repositories::store_repository::StoreRepository;
use salesrs::domain::services::symbol_table::SymbolTable;
use salesrs::domain::use_cases::ingest_order::IngestOrderUseCase;
use salesrs::infrastructure::database::connection;
use salesrs::infrastructure::postgrest::client::{PostgrestClient, DEFAULT_TIMEOUT_SECS};
use salesrs::infrastructure::postgrest::sales_event_repo::PostgrestSalesEventRepository;
use salesrs::infrastructure::postgrest::store_repo::PostgrestStoreRepository;
use salesrs::infrastructure::repositories::sales_event_repo_impl::SalesEventRepositoryImpl;
use salesrs::infrastructure::repositories::store_repo_impl::StoreRepositoryImpl;
use salesrs::presentation::routes;
use salesrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

type Repositories = (Arc<dyn StoreRepository>, Arc<dyn SalesEventRepository>);

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting salesrs...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    if settings.metrics.enabled {
        salesrs::infrastructure::metrics::init_metrics(&settings.metrics.listen_addr);
    }

    // 3. Build persistence collaborators
    let (stores, events) = build_repositories(&settings).await?;

    // 4. Build the intake use case
    let symbols = SymbolTable::from(&settings.symbols);
    info!(rules = symbols.rules().len(), "Product symbol table loaded");
    let use_case = Arc::new(IngestOrderUseCase::new(stores, events, symbols));

    // 5. Start HTTP server
    let app = routes::app(use_case);
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(settings: &Settings) -> anyhow::Result<Repositories> {
    match settings.persistence.backend {
        PersistenceBackend::Postgrest => {
            let supabase = settings.require_supabase()?;
            let timeout =
                Duration::from_secs(supabase.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
            let client =
                PostgrestClient::new(&supabase.url, supabase.service_role_key.clone(), timeout)?;
            info!("Using Supabase REST backend at {}", supabase.url);

            Ok((
                Arc::new(PostgrestStoreRepository::new(client.clone())),
                Arc::new(PostgrestSalesEventRepository::new(client)),
            ))
        }
        PersistenceBackend::Database => {
            let db = Arc::new(connection::create_pool(settings.require_database()?).await?);
            info!("Database connection established");

            info!("Running database migrations...");
            Migrator::up(db.as_ref(), None).await?;
            info!("Database migrations applied");

            Ok((
                Arc::new(StoreRepositoryImpl::new(db.clone())),
                Arc::new(SalesEventRepositoryImpl::new(db)),
            ))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
