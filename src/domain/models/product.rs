// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 商品实体
///
/// 表示目录中的一个商品记录。记录由爬取管道或外部创建请求
/// 产生，标识符由存储层在插入时分配。爬取本身从不修改
/// 已存在的记录。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// 商品唯一标识符，由存储层分配
    pub id: i32,
    /// 商品展示名称，非空文本
    pub name: String,
    /// 商品价格，有限非负数
    pub price: f64,
    /// 创建时间，记录插入的时间戳
    pub created_at: DateTime<FixedOffset>,
}

/// 待插入的商品数据
///
/// 尚未获得标识符的已验证记录。价格不变量（有限且非负）
/// 在构造时强制执行，不满足的候选项被丢弃而不是存储。
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    /// 商品展示名称
    pub name: String,
    /// 商品价格
    pub price: f64,
}

impl NewProduct {
    /// 从提取的原始字段构造已验证的记录
    ///
    /// # 参数
    ///
    /// * `name` - 原始展示名称
    /// * `price_text` - 机器可读价格属性的原始文本
    ///
    /// # 返回值
    ///
    /// 名称为空、价格文本无法解析为数字、或解析结果不是
    /// 有限非负数时返回 `None`，该候选项应被丢弃。
    pub fn from_raw(name: &str, price_text: &str) -> Option<Self> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let price: f64 = price_text.trim().parse().ok()?;
        if !price.is_finite() || price < 0.0 {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            price,
        })
    }
}
