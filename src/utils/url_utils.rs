// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 获取URL所属站点的源（scheme://host[:port]/）
///
/// 分页锚点的相对路径统一拼接到站点源，而不是当前列表页。
pub fn site_origin(url: &Url) -> Result<Url, ParseError> {
    Url::parse(&url.origin().ascii_serialization())
}
