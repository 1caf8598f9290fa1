// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Extension;
use axum_test::TestServer;
use maxwatch::domain::repositories::product_repository::ProductRepository;
use maxwatch::hub::notification_hub::NotificationHub;
use maxwatch::infrastructure::repositories::product_repo_impl::ProductRepositoryImpl;
use maxwatch::presentation::routes;
use maxwatch::workers::manager::CrawlSupervisor;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

/// 集成测试应用
#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
    pub repository: Arc<ProductRepositoryImpl>,
    pub hub: Arc<NotificationHub>,
}

/// 创建使用模拟传输的测试应用
pub async fn create_test_app() -> TestApp {
    build_test_app(false).await
}

/// 创建监听真实端口的测试应用，用于WebSocket测试
pub async fn create_ws_test_app() -> TestApp {
    build_test_app(true).await
}

async fn build_test_app(http_transport: bool) -> TestApp {
    let db_pool = connect_memory_db().await;
    let repository = Arc::new(ProductRepositoryImpl::new(db_pool.clone()));
    let hub = Arc::new(NotificationHub::new(
        repository.clone() as Arc<dyn ProductRepository>,
    ));
    let supervisor = CrawlSupervisor::idle();

    let app = routes::routes()
        .layer(Extension(repository.clone()))
        .layer(Extension(hub.clone()))
        .layer(Extension(supervisor));

    let server = if http_transport {
        TestServer::builder().http_transport().build(app).unwrap()
    } else {
        TestServer::new(app).unwrap()
    };

    TestApp {
        server,
        db_pool,
        repository,
        hub,
    }
}

/// 连接独立的内存SQLite数据库并应用迁移
///
/// 单连接池，所有查询落在同一个内存数据库上。
pub async fn connect_memory_db() -> Arc<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options)
        .await
        .expect("Failed to connect to in-memory sqlite");
    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");
    Arc::new(db)
}
