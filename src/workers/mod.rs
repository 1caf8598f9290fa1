// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 提供后台爬取任务的执行与生命周期管理
pub mod crawl_worker;
pub mod manager;
