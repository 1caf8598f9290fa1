// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl::CrawlRunStatus;
use crate::workers::crawl_worker::CrawlError;
use parking_lot::RwLock;
use std::future::Future;
use std::sync::Arc;
use tracing::{error, info};

/// 爬取任务监督器
///
/// 跟踪后台爬取任务的结果，供状态端点查询。失败的运行
/// 不会静默消失，其错误描述会保留在状态里。
pub struct CrawlSupervisor {
    status: RwLock<CrawlRunStatus>,
}

impl CrawlSupervisor {
    /// 创建处于待命状态的监督器
    ///
    /// 用于爬虫被禁用时，状态端点仍可访问。
    pub fn idle() -> Arc<Self> {
        Arc::new(Self {
            status: RwLock::new(CrawlRunStatus::Pending),
        })
    }

    /// 启动一次后台爬取并跟踪其结果
    ///
    /// 任务在独立的 tokio 任务中运行，不阻塞调用方。
    ///
    /// # 参数
    ///
    /// * `run` - 返回入库记录数的爬取Future
    pub fn spawn<F>(run: F) -> Arc<Self>
    where
        F: Future<Output = Result<usize, CrawlError>> + Send + 'static,
    {
        let supervisor = Arc::new(Self {
            status: RwLock::new(CrawlRunStatus::Pending),
        });

        let tracker = supervisor.clone();
        tokio::spawn(async move {
            *tracker.status.write() = CrawlRunStatus::Running;
            match run.await {
                Ok(count) => {
                    info!("Crawl run completed, {} records stored", count);
                    *tracker.status.write() = CrawlRunStatus::Completed {
                        records_stored: count,
                    };
                }
                Err(e) => {
                    error!("Crawl run failed: {}", e);
                    *tracker.status.write() = CrawlRunStatus::Failed {
                        error: e.to_string(),
                    };
                }
            }
        });

        supervisor
    }

    /// 获取当前运行状态的快照
    pub fn status(&self) -> CrawlRunStatus {
        self.status.read().clone()
    }
}
