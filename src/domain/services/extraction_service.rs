use crate::domain::models::catalog::ExtractedItem;
use scraper::{Html, Selector};

/// 商品提取器
///
/// 负责从渲染后的目录页面标记中提取候选商品条目。
/// 对缺少名称或价格字段的节点保持容忍：不完整的文章
/// 不产出条目，也不中断同页其余条目的提取。
pub struct ProductExtractor {
    cell_selector: Selector,
    article_selector: Selector,
    title_selector: Selector,
    price_selector: Selector,
}

impl ProductExtractor {
    pub fn new() -> Self {
        Self {
            cell_selector: Selector::parse("div.col-12").expect("static selector"),
            article_selector: Selector::parse("article").expect("static selector"),
            title_selector: Selector::parse("a[data-v-32495050]").expect("static selector"),
            price_selector: Selector::parse("div[data-repid-price]").expect("static selector"),
        }
    }

    /// 提取页面中的全部候选商品条目
    ///
    /// 遍历网格单元内的文章节点。文章内最后一个价格节点的
    /// 属性值生效；title属性为空或href为占位符`#`的锚点被
    /// 跳过。输出保持文档顺序。
    ///
    /// 解析后的文档不跨越await点，因此整页结果在此物化为
    /// Vec而不是惰性序列。
    pub fn extract(&self, html: &str) -> Vec<ExtractedItem> {
        let document = Html::parse_document(html);
        let mut items = Vec::new();

        for cell in document.select(&self.cell_selector) {
            for article in cell.select(&self.article_selector) {
                // Last price node in the article wins
                let mut price_text: Option<&str> = None;
                for node in article.select(&self.price_selector) {
                    if let Some(value) = node.value().attr("data-repid-price") {
                        price_text = Some(value);
                    }
                }
                let Some(price_text) = price_text else {
                    continue;
                };

                for anchor in article.select(&self.title_selector) {
                    let title = anchor.value().attr("title").unwrap_or_default();
                    let href = anchor.value().attr("href").unwrap_or_default();
                    if title.is_empty() || href.is_empty() || href == "#" {
                        continue;
                    }
                    items.push(ExtractedItem {
                        name: title.to_string(),
                        price_text: price_text.to_string(),
                    });
                }
            }
        }

        items
    }
}

impl Default for ProductExtractor {
    fn default() -> Self {
        Self::new()
    }
}
