// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 通知模块
///
/// 维护存活订阅者连接的注册表
/// 负责记录创建事件的广播与同连接上的同步查询应答
pub mod notification_hub;
