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

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::settings::CrawlerSettings;
use crate::domain::models::product::NewProduct;
use crate::domain::repositories::product_repository::{ProductRepository, RepositoryError};
use crate::domain::services::extraction_service::ProductExtractor;
use crate::domain::services::pagination_service::{PaginationError, PaginationWalker};
use crate::engines::chromium::ChromiumSession;
use crate::engines::traits::{RenderError, RenderSession};
use crate::hub::notification_hub::{BroadcastEvent, NotificationHub};

/// 爬取运行错误
#[derive(Error, Debug)]
pub enum CrawlError {
    /// 页面渲染或浏览器会话错误
    #[error("render error: {0}")]
    Render(#[from] RenderError),
    /// 分页发现错误
    #[error("pagination error: {0}")]
    Pagination(#[from] PaginationError),
    /// 持久化错误
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
    /// 目录根URL无效
    #[error("invalid catalog url: {0}")]
    CatalogUrl(#[from] url::ParseError),
}

/// 目录爬取工作器
///
/// 打开目录首页，发现全部分页，按顺序逐页提取商品并入库。
/// 每页的提取结果作为一个批次写入，写入成功后逐条广播。
pub struct CrawlWorker {
    repository: Arc<dyn ProductRepository>,
    hub: Arc<NotificationHub>,
    settings: CrawlerSettings,
    extractor: ProductExtractor,
    walker: PaginationWalker,
}

impl CrawlWorker {
    /// 创建新的爬取工作器实例
    pub fn new(
        repository: Arc<dyn ProductRepository>,
        hub: Arc<NotificationHub>,
        settings: CrawlerSettings,
    ) -> Self {
        Self {
            repository,
            hub,
            settings,
            extractor: ProductExtractor::new(),
            walker: PaginationWalker::new(),
        }
    }

    /// 执行一次完整的目录爬取
    ///
    /// 启动浏览器会话，完成后无论成败都会关闭会话。
    ///
    /// # 返回值
    ///
    /// 返回本次运行入库的记录条数
    pub async fn run(&self) -> Result<usize, CrawlError> {
        let session = ChromiumSession::launch(&self.settings).await?;
        let outcome = self.crawl_catalog(&session).await;

        if let Err(e) = session.close().await {
            warn!("Failed to close browser session: {}", e);
        }

        outcome
    }

    /// 在已就绪的渲染会话上执行目录爬取
    ///
    /// 单页内不可解析的条目会被丢弃，页面级的导航失败或
    /// 批次写入失败则终止整次运行。
    #[instrument(skip(self, session), fields(catalog = %self.settings.catalog_url))]
    pub async fn crawl_catalog(&self, session: &dyn RenderSession) -> Result<usize, CrawlError> {
        let catalog_root = Url::parse(&self.settings.catalog_url)?;

        info!("Opening catalog root page");
        let document = session.open(catalog_root.as_str()).await?;
        let targets = self.walker.discover(&document.html, &catalog_root)?;
        info!("Discovered {} catalog pages", targets.len());

        let mut stored = 0usize;
        for target in &targets {
            stored += self.crawl_page(session, target.url.as_str()).await?;
        }

        info!("Catalog crawl finished, {} records stored", stored);
        Ok(stored)
    }

    async fn crawl_page(
        &self,
        session: &dyn RenderSession,
        url: &str,
    ) -> Result<usize, CrawlError> {
        let document = session.open(url).await?;
        let items = self.extractor.extract(&document.html);

        let records: Vec<NewProduct> = items
            .iter()
            .filter_map(|item| {
                let parsed = NewProduct::from_raw(&item.name, &item.price_text);
                if parsed.is_none() {
                    warn!(
                        "Dropping item with unusable name or price: {:?} / {:?}",
                        item.name, item.price_text
                    );
                }
                parsed
            })
            .collect();

        if records.is_empty() {
            info!("No products extracted from {}", url);
            return Ok(0);
        }

        let products = self.repository.insert_batch(records).await?;
        for product in &products {
            self.hub.broadcast(&BroadcastEvent::from(product));
        }

        info!("Stored {} products from {}", products.len(), url);
        Ok(products.len())
    }
}
