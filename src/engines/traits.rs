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
use thiserror::Error;

/// 渲染引擎错误类型
#[derive(Error, Debug)]
pub enum RenderError {
    /// 浏览器协议错误
    #[error("Browser error: {0}")]
    Browser(#[from] chromiumoxide::error::CdpError),
    /// 引擎启动失败
    #[error("Engine launch failed: {0}")]
    Launch(String),
    /// 导航超时
    #[error("Navigation timed out")]
    Timeout,
}

/// 渲染后的文档
///
/// 一次导航完成并等待动态内容稳定后得到的完整页面标记
pub struct RenderedDocument {
    /// 文档来源URL
    pub url: String,
    /// 渲染后的完整HTML
    pub html: String,
}

/// 渲染会话特质
///
/// 驱动一个长生命周期的无头渲染引擎实例获取完整加载的页面
/// 标记。同一实例在一次爬取运行的所有页面间复用；运行结束时
/// 无论成败都必须释放。
#[async_trait]
pub trait RenderSession: Send + Sync {
    /// 导航到URL并阻塞至动态内容预期已加载完成
    async fn open(&self, url: &str) -> Result<RenderedDocument, RenderError>;

    /// 终止引擎实例，释放其持有的全部资源
    async fn close(&self) -> Result<(), RenderError>;
}
