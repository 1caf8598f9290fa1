// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含请求与响应的数据传输对象
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含核心业务实体、服务和仓库接口
pub mod domain;

/// 引擎模块
///
/// 驱动无头浏览器获取渲染后的页面内容
pub mod engines;

/// 通知中心模块
///
/// 管理实时订阅连接并向其推送记录事件
pub mod hub;

/// 基础设施模块
///
/// 提供外部服务集成，如数据库和仓库实现
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和WebSocket升级
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;

/// 工作器模块
///
/// 实现后台爬取任务及其监督
pub mod workers;
