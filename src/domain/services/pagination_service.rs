// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::catalog::PageTarget;
use crate::utils::url_utils;
use scraper::{Html, Selector};
use thiserror::Error;
use tracing::warn;
use url::Url;

/// 分页发现错误类型
#[derive(Error, Debug)]
pub enum PaginationError {
    /// 首页上没有编号导航组件，本次运行没有可遍历的页面
    #[error("Pagination widget not found on first page")]
    WidgetMissing,
    /// 目录URL没有可用的站点源
    #[error("Catalog URL has no usable origin: {0}")]
    Origin(#[from] url::ParseError),
}

/// 分页遍历器
///
/// 从首页的编号导航组件中发现本次运行要访问的全部列表页。
/// 组件缺失是致命条件，不会退化为"单页"处理。
pub struct PaginationWalker {
    widget_selector: Selector,
    anchor_selector: Selector,
}

impl PaginationWalker {
    pub fn new() -> Self {
        Self {
            widget_selector: Selector::parse("div.lvl2__content-nav-numbers-number")
                .expect("static selector"),
            anchor_selector: Selector::parse("a[href]").expect("static selector"),
        }
    }

    /// 发现目录的全部分页目标
    ///
    /// 只读取文档中第一个导航组件。href为占位符`#`的锚点解析
    /// 为目录根URL并标记为首页；其余锚点的href与站点源拼接。
    /// 顺序与标记中出现的顺序一致；拼接失败的锚点被跳过。
    pub fn discover(
        &self,
        html: &str,
        catalog_root: &Url,
    ) -> Result<Vec<PageTarget>, PaginationError> {
        let document = Html::parse_document(html);
        let widget = document
            .select(&self.widget_selector)
            .next()
            .ok_or(PaginationError::WidgetMissing)?;

        let origin = url_utils::site_origin(catalog_root)?;
        let mut targets = Vec::new();

        for anchor in widget.select(&self.anchor_selector) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };

            if href == "#" {
                targets.push(PageTarget {
                    url: catalog_root.clone(),
                    is_first: true,
                });
                continue;
            }

            match url_utils::resolve_url(&origin, href) {
                Ok(url) => targets.push(PageTarget {
                    url,
                    is_first: false,
                }),
                Err(e) => {
                    warn!("Skipping unresolvable pagination href {:?}: {}", href, e);
                }
            }
        }

        Ok(targets)
    }
}

impl Default for PaginationWalker {
    fn default() -> Self {
        Self::new()
    }
}
