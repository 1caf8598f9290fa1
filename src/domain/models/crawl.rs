// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 爬取运行状态枚举
///
/// 表示后台爬取任务在其生命周期中的当前阶段，由监督器记录
/// 并通过状态端点对外暴露。状态转换遵循以下流程：
/// Pending → Running → Completed/Failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CrawlRunStatus {
    /// 等待中，任务尚未启动
    Pending,
    /// 运行中，任务正在逐页爬取
    Running,
    /// 已完成，携带本次运行存储的记录数
    Completed {
        /// 存储的记录数
        records_stored: usize,
    },
    /// 已失败，携带终止运行的错误描述
    Failed {
        /// 错误描述
        error: String,
    },
}

impl fmt::Display for CrawlRunStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrawlRunStatus::Pending => write!(f, "pending"),
            CrawlRunStatus::Running => write!(f, "running"),
            CrawlRunStatus::Completed { records_stored } => {
                write!(f, "completed ({} records)", records_stored)
            }
            CrawlRunStatus::Failed { error } => write!(f, "failed: {}", error),
        }
    }
}
