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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含数据库、服务器和爬虫等所有配置项
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// 数据库配置
    pub database: DatabaseSettings,
    /// 服务器配置
    pub server: ServerSettings,
    /// 爬虫配置
    pub crawler: CrawlerSettings,
}

/// 数据库配置设置
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    /// 数据库连接URL
    pub url: String,
    /// 最大连接数
    pub max_connections: Option<u32>,
    /// 最小连接数
    pub min_connections: Option<u32>,
    /// 连接超时时间（秒）
    pub connect_timeout: Option<u64>,
    /// 空闲连接超时时间（秒）
    pub idle_timeout: Option<u64>,
}

/// 服务器配置设置
#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 爬虫配置设置
#[derive(Debug, Deserialize, Clone)]
pub struct CrawlerSettings {
    /// 是否在启动时运行目录爬取
    pub enabled: bool,
    /// 目录根列表页URL
    pub catalog_url: String,
    /// 页面动态内容的固定等待时间（毫秒）
    pub settle_wait_ms: u64,
    /// 单次导航的超时时间（秒）
    pub navigation_timeout_secs: u64,
    /// 远程调试URL（设置后附加到已运行的浏览器实例而不是启动新实例）
    pub remote_debugging_url: Option<String>,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Default DB settings
            .set_default("database.url", "sqlite://products.db?mode=rwc")?
            .set_default("database.max_connections", 16)?
            .set_default("database.min_connections", 2)?
            .set_default("database.connect_timeout", 10)?
            .set_default("database.idle_timeout", 300)?
            // Default crawler settings
            .set_default("crawler.enabled", true)?
            .set_default("crawler.catalog_url", "https://www.maxidom.ru/catalog/potolki/")?
            .set_default("crawler.settle_wait_ms", 5000)?
            .set_default("crawler.navigation_timeout_secs", 30)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("MAXWATCH").separator("__"));

        builder.build()?.try_deserialize()
    }
}
