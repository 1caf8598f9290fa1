// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 目录（catalog）：分页目标与提取的原始条目
/// - 爬取（crawl）：后台爬取运行的可观测状态
/// - 商品（product）：商品记录及其验证规则
///
/// 这些模型构成了系统的数据基础，定义了业务概念的
/// 结构和行为，是领域驱动设计的核心组成部分。
pub mod catalog;
pub mod crawl;
pub mod product;
