// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::product_repo_impl::ProductRepositoryImpl;
use crate::presentation::handlers::{crawl_handler, product_handler, ws_handler};
use axum::{
    routing::{delete, get, post, put},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route(
            "/v1/products",
            get(product_handler::list_products::<ProductRepositoryImpl>),
        )
        .route(
            "/v1/products",
            post(product_handler::create_product::<ProductRepositoryImpl>),
        )
        .route(
            "/v1/products/{id}",
            get(product_handler::get_product::<ProductRepositoryImpl>),
        )
        .route(
            "/v1/products/{id}",
            put(product_handler::update_product::<ProductRepositoryImpl>),
        )
        .route(
            "/v1/products/{id}",
            delete(product_handler::delete_product::<ProductRepositoryImpl>),
        )
        .route("/v1/crawl/status", get(crawl_handler::get_crawl_status))
        .route("/ws", get(ws_handler::ws_upgrade));

    Router::new().merge(public_routes).merge(api_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
