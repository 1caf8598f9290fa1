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

use async_trait::async_trait;
use maxwatch::config::settings::CrawlerSettings;
use maxwatch::domain::repositories::product_repository::ProductRepository;
use maxwatch::engines::traits::{RenderError, RenderSession, RenderedDocument};
use maxwatch::hub::notification_hub::NotificationHub;
use maxwatch::infrastructure::repositories::product_repo_impl::ProductRepositoryImpl;
use maxwatch::workers::crawl_worker::{CrawlError, CrawlWorker};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::helpers::connect_memory_db;

const CATALOG_ROOT: &str = "https://fixture.test/catalog/tiles/";
const PAGE_2: &str = "https://fixture.test/catalog/tiles/?PAGEN_2=2";

/// 以固定页面集合应答的渲染会话
struct FixtureSession {
    pages: HashMap<String, String>,
}

impl FixtureSession {
    fn new(pages: Vec<(&str, String)>) -> Self {
        Self {
            pages: pages
                .into_iter()
                .map(|(url, html)| (url.to_string(), html))
                .collect(),
        }
    }
}

#[async_trait]
impl RenderSession for FixtureSession {
    async fn open(&self, url: &str) -> Result<RenderedDocument, RenderError> {
        let html = self
            .pages
            .get(url)
            .unwrap_or_else(|| panic!("no fixture for {}", url));
        Ok(RenderedDocument {
            url: url.to_string(),
            html: html.clone(),
        })
    }

    async fn close(&self) -> Result<(), RenderError> {
        Ok(())
    }
}

fn page(body: &str) -> String {
    format!("<html><body>{}</body></html>", body)
}

fn two_page_nav() -> &'static str {
    r##"<div class="lvl2__content-nav-numbers-number">
         <a href="#">1</a>
         <a href="/catalog/tiles/?PAGEN_2=2">2</a>
       </div>"##
}

fn single_page_nav() -> &'static str {
    r##"<div class="lvl2__content-nav-numbers-number"><a href="#">1</a></div>"##
}

fn article(title: &str, price: &str) -> String {
    format!(
        r#"<div class="col-12"><article>
             <a data-v-32495050 title="{}" href="/catalog/item/">x</a>
             <div data-repid-price="{}"></div>
           </article></div>"#,
        title, price
    )
}

fn article_without_title(price: &str) -> String {
    format!(
        r#"<div class="col-12"><article>
             <a data-v-32495050 href="/catalog/item/">x</a>
             <div data-repid-price="{}"></div>
           </article></div>"#,
        price
    )
}

fn crawler_settings() -> CrawlerSettings {
    CrawlerSettings {
        enabled: true,
        catalog_url: CATALOG_ROOT.to_string(),
        settle_wait_ms: 0,
        navigation_timeout_secs: 5,
        remote_debugging_url: None,
    }
}

async fn build_worker() -> (CrawlWorker, Arc<ProductRepositoryImpl>, Arc<NotificationHub>) {
    let db = connect_memory_db().await;
    let repository = Arc::new(ProductRepositoryImpl::new(db));
    let hub = Arc::new(NotificationHub::new(
        repository.clone() as Arc<dyn ProductRepository>,
    ));
    let worker = CrawlWorker::new(
        repository.clone() as Arc<dyn ProductRepository>,
        hub.clone(),
        crawler_settings(),
    );
    (worker, repository, hub)
}

#[tokio::test]
async fn two_page_catalog_stores_one_record_and_broadcasts_once() {
    let (worker, repository, hub) = build_worker().await;
    let session = FixtureSession::new(vec![
        (
            CATALOG_ROOT,
            page(&format!("{}{}", two_page_nav(), article("Tile A", "10.5"))),
        ),
        (PAGE_2, page(&article_without_title("99.0"))),
    ]);

    let (tx, mut rx) = mpsc::unbounded_channel();
    hub.register(tx);

    let stored = worker.crawl_catalog(&session).await.unwrap();
    assert_eq!(stored, 1);

    let products = repository.list_all().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Tile A");
    assert_eq!(products[0].price, 10.5);

    let frame = rx.recv().await.unwrap();
    let event: serde_json::Value = serde_json::from_str(&frame).unwrap();
    assert_eq!(event["name"], "Tile A");
    assert_eq!(event["price"], 10.5);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn unparseable_price_drops_that_item_only() {
    let (worker, repository, _hub) = build_worker().await;
    let session = FixtureSession::new(vec![(
        CATALOG_ROOT,
        page(&format!(
            "{}{}{}",
            single_page_nav(),
            article("Tile A", "not-a-number"),
            article("Tile B", "15.0")
        )),
    )]);

    let stored = worker.crawl_catalog(&session).await.unwrap();
    assert_eq!(stored, 1);

    let products = repository.list_all().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Tile B");
}

#[tokio::test]
async fn rerun_stores_duplicate_records() {
    let (worker, repository, _hub) = build_worker().await;
    let session = FixtureSession::new(vec![(
        CATALOG_ROOT,
        page(&format!(
            "{}{}",
            single_page_nav(),
            article("Tile A", "10.5")
        )),
    )]);

    assert_eq!(worker.crawl_catalog(&session).await.unwrap(), 1);
    assert_eq!(worker.crawl_catalog(&session).await.unwrap(), 1);

    let products = repository.list_all().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].name, "Tile A");
    assert_eq!(products[1].name, "Tile A");
    assert_ne!(products[0].id, products[1].id);
}

#[tokio::test]
async fn missing_navigation_widget_fails_the_run() {
    let (worker, repository, _hub) = build_worker().await;
    let session = FixtureSession::new(vec![(
        CATALOG_ROOT,
        page(&article("Tile A", "10.5")),
    )]);

    let result = worker.crawl_catalog(&session).await;
    assert!(matches!(result, Err(CrawlError::Pagination(_))));
    assert!(repository.list_all().await.unwrap().is_empty());
}
