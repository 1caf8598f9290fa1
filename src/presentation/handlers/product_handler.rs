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

use crate::application::dto::product_request::ProductRequestDto;
use crate::application::dto::product_response::ProductResponseDto;
use crate::domain::models::product::NewProduct;
use crate::domain::repositories::product_repository::{ProductRepository, RepositoryError};
use crate::hub::notification_hub::{BroadcastEvent, NotificationHub};
use crate::presentation::errors::AppError;
use axum::extract::Path;
use axum::{http::StatusCode, Extension, Json};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

/// 列出全部商品记录
pub async fn list_products<R: ProductRepository>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<ProductResponseDto>>, AppError> {
    let products = repo.list_all().await?;
    let body = products
        .into_iter()
        .map(ProductResponseDto::from)
        .collect();
    Ok(Json(body))
}

/// 创建新商品记录
///
/// 成功创建后向通知中心广播该记录，外部创建与爬取摄取
/// 走同一条广播路径。
pub async fn create_product<R: ProductRepository>(
    Extension(repo): Extension<Arc<R>>,
    Extension(hub): Extension<Arc<NotificationHub>>,
    Json(payload): Json<ProductRequestDto>,
) -> Result<(StatusCode, Json<ProductResponseDto>), AppError> {
    if let Err(errors) = payload.validate() {
        return Err(AppError::from(anyhow::anyhow!(
            "Validation error: {:?}",
            errors
        )));
    }

    let product = repo
        .insert(NewProduct {
            name: payload.name,
            price: payload.price,
        })
        .await?;

    hub.broadcast(&BroadcastEvent::from(&product));

    Ok((StatusCode::CREATED, Json(ProductResponseDto::from(product))))
}

/// 根据ID获取商品记录
pub async fn get_product<R: ProductRepository>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<ProductResponseDto>, AppError> {
    let product = repo
        .find_by_id(id)
        .await?
        .ok_or(RepositoryError::NotFound)?;
    Ok(Json(ProductResponseDto::from(product)))
}

/// 整体替换商品记录的名称与价格
pub async fn update_product<R: ProductRepository>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequestDto>,
) -> Result<Json<ProductResponseDto>, AppError> {
    if let Err(errors) = payload.validate() {
        return Err(AppError::from(anyhow::anyhow!(
            "Validation error: {:?}",
            errors
        )));
    }

    let product = repo
        .update(
            id,
            NewProduct {
                name: payload.name,
                price: payload.price,
            },
        )
        .await?;
    Ok(Json(ProductResponseDto::from(product)))
}

/// 删除商品记录
pub async fn delete_product<R: ProductRepository>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    repo.delete(id).await?;
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
