// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 商品写入请求DTO
///
/// 创建与整体替换更新共用同一载荷形状
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct ProductRequestDto {
    /// 商品展示名称
    #[validate(length(min = 1, message = "name cannot be empty"))]
    pub name: String,
    /// 商品价格，非负
    #[validate(range(min = 0.0, message = "price is invalid"))]
    pub price: f64,
}
