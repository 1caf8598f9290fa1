// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::product::Product;
use serde::{Deserialize, Serialize};

/// 商品响应DTO
///
/// CRUD表面的对外记录形状，与广播事件携带同样的字段
#[derive(Debug, Deserialize, Serialize)]
pub struct ProductResponseDto {
    /// 记录标识符
    pub id: i32,
    /// 商品名称
    pub name: String,
    /// 商品价格
    pub price: f64,
}

impl From<Product> for ProductResponseDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}
