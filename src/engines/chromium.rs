// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::CrawlerSettings;
use crate::engines::traits::{RenderError, RenderSession, RenderedDocument};
use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::info;

/// Chromium渲染会话
///
/// 通过CDP驱动一个Chromium实例。单一所有者纪律：会话独占
/// 浏览器与标签页，导航调用不并发。配置了远程调试URL时附加
/// 到已运行的浏览器，否则启动新实例。
pub struct ChromiumSession {
    browser: Mutex<Browser>,
    page: Page,
    handler_task: JoinHandle<()>,
    settle_wait: Duration,
    navigation_timeout: Duration,
}

impl ChromiumSession {
    /// 获取一个渲染会话
    ///
    /// 启动（或附加到）浏览器实例，创建一个在后续所有导航间
    /// 复用的标签页，并启动CDP事件处理循环。
    ///
    /// # 参数
    ///
    /// * `settings` - 爬虫配置
    ///
    /// # 返回值
    ///
    /// * `Ok(ChromiumSession)` - 就绪的会话
    /// * `Err(RenderError)` - 启动或连接失败
    pub async fn launch(settings: &CrawlerSettings) -> Result<Self, RenderError> {
        let (browser, mut handler) = if let Some(url) = &settings.remote_debugging_url {
            info!("Connecting to remote browser instance at {}", url);
            Browser::connect(url).await?
        } else {
            let config = BrowserConfig::builder()
                .no_sandbox()
                .request_timeout(Duration::from_secs(settings.navigation_timeout_secs))
                .arg("--disable-gpu")
                .arg("--disable-dev-shm-usage")
                .build()
                .map_err(RenderError::Launch)?;
            Browser::launch(config).await?
        };

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser: Mutex::new(browser),
            page,
            handler_task,
            settle_wait: Duration::from_millis(settings.settle_wait_ms),
            navigation_timeout: Duration::from_secs(settings.navigation_timeout_secs),
        })
    }
}

#[async_trait]
impl RenderSession for ChromiumSession {
    async fn open(&self, url: &str) -> Result<RenderedDocument, RenderError> {
        tokio::time::timeout(self.navigation_timeout, self.page.goto(url))
            .await
            .map_err(|_| RenderError::Timeout)??;

        // Fixed settle wait in lieu of a readiness signal from the page
        tokio::time::sleep(self.settle_wait).await;

        let html = self.page.content().await?;

        Ok(RenderedDocument {
            url: url.to_string(),
            html,
        })
    }

    async fn close(&self) -> Result<(), RenderError> {
        let mut browser = self.browser.lock().await;
        browser.close().await?;
        let _ = browser.wait().await;
        self.handler_task.abort();
        Ok(())
    }
}
