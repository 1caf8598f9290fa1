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

use axum::Extension;
use maxwatch::config::settings::Settings;
use maxwatch::domain::repositories::product_repository::ProductRepository;
use maxwatch::hub::notification_hub::NotificationHub;
use maxwatch::infrastructure::database::connection;
use maxwatch::infrastructure::repositories::product_repo_impl::ProductRepositoryImpl;
use maxwatch::presentation::routes;
use maxwatch::workers::crawl_worker::CrawlWorker;
use maxwatch::workers::manager::CrawlSupervisor;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use maxwatch::utils::telemetry;
use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting maxwatch...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    info!("Running database migrations...");
    Migrator::up(db.as_ref(), None).await?;
    info!("Database migrations applied");

    // 4. Initialize components
    let product_repo = Arc::new(ProductRepositoryImpl::new(db.clone()));
    let hub = Arc::new(NotificationHub::new(
        product_repo.clone() as Arc<dyn ProductRepository>,
    ));

    // 5. Start the background catalog crawl
    let supervisor = if settings.crawler.enabled {
        let worker = CrawlWorker::new(
            product_repo.clone() as Arc<dyn ProductRepository>,
            hub.clone(),
            settings.crawler.clone(),
        );
        info!("Starting catalog crawl task");
        CrawlSupervisor::spawn(async move { worker.run().await })
    } else {
        info!("Catalog crawl disabled");
        CrawlSupervisor::idle()
    };

    // 6. Start HTTP server
    let app = routes::routes()
        .layer(Extension(product_repo))
        .layer(Extension(hub))
        .layer(Extension(supervisor))
        .layer(Extension(settings.clone()));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
