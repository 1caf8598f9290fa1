// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 目录分页目标
///
/// 一次爬取运行中要访问的单个列表页。由分页发现逻辑在首页
/// 上一次性产生，访问后即丢弃。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTarget {
    /// 列表页URL
    pub url: Url,
    /// 是否为规范首页（导航组件中的占位锚点解析所得）
    pub is_first: bool,
}

/// 从单个页面提取的原始条目
///
/// 未经验证的（名称，价格文本）对，仅在该页面的提取范围内
/// 存活，随即被验证逻辑消费。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedItem {
    /// 锚点title属性携带的原始展示名称
    pub name: String,
    /// 价格节点属性携带的原始价格文本
    pub price_text: String,
}
