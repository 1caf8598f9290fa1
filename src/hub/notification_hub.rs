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

use crate::domain::models::product::Product;
use crate::domain::repositories::product_repository::ProductRepository;
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// 查询命令前缀，其余部分必须解析为整数记录ID
const GET_PRODUCT_PREFIX: &str = "get_product:";
/// 无法识别的文本被回显的次数
const ECHO_REPEAT: usize = 10;

/// 广播事件
///
/// 每创建一条记录就发出一次的（id，名称，价格）快照，
/// 即发即弃，无投递回执，不持久化。同一形状同时用作
/// 订阅者查询命中时的应答。
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BroadcastEvent {
    /// 记录标识符
    pub id: i32,
    /// 商品名称
    pub name: String,
    /// 商品价格
    pub price: f64,
}

impl From<&Product> for BroadcastEvent {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// 通知中心
///
/// 维护存活订阅者连接的注册表。注册表是爬取任务与所有服务
/// 任务之间唯一的共享状态：每次变更和广播期间的每次读取都
/// 经由同一把锁同步，广播在迭代前先取注册集合的时点快照。
///
/// 注册表成员资格等同于连接的Open状态：握手中的连接尚未
/// 注册，注销即为Closed转换。
pub struct NotificationHub {
    subscribers: RwLock<HashMap<Uuid, mpsc::UnboundedSender<String>>>,
    repository: Arc<dyn ProductRepository>,
}

impl NotificationHub {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            subscribers: RwLock::new(HashMap::new()),
            repository,
        }
    }

    /// 注册一个新连接
    ///
    /// 可以与广播及其他注册并发调用。
    ///
    /// # 参数
    ///
    /// * `sender` - 连接写端的发送句柄
    ///
    /// # 返回值
    ///
    /// 返回用于注销的订阅者标识符
    pub fn register(&self, sender: mpsc::UnboundedSender<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.subscribers.write().insert(id, sender);
        debug!(subscriber_id = %id, "Subscriber registered");
        id
    }

    /// 注销一个连接，幂等
    pub fn unregister(&self, id: Uuid) {
        if self.subscribers.write().remove(&id).is_some() {
            debug!(subscriber_id = %id, "Subscriber unregistered");
        }
    }

    /// 当前注册的订阅者数量
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// 向每个当前注册的连接投递一个事件
    ///
    /// 对单个连接的投递失败不会阻止对其余连接的投递，也不会
    /// 从本方法抛出；失败的连接随后被移出注册表。
    pub fn broadcast(&self, event: &BroadcastEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize broadcast event: {}", e);
                return;
            }
        };

        // Point-in-time snapshot of the registered set
        let snapshot: Vec<(Uuid, mpsc::UnboundedSender<String>)> = self
            .subscribers
            .read()
            .iter()
            .map(|(id, sender)| (*id, sender.clone()))
            .collect();

        let mut dead = Vec::new();
        for (id, sender) in snapshot {
            if sender.send(payload.clone()).is_err() {
                dead.push(id);
            }
        }

        if !dead.is_empty() {
            let mut subscribers = self.subscribers.write();
            for id in dead {
                if subscribers.remove(&id).is_some() {
                    warn!(subscriber_id = %id, "Removed dead subscriber during broadcast");
                }
            }
        }
    }

    /// 处理订阅者发来的一个文本帧，返回应答文本
    ///
    /// 识别形式为`get_product:<id>`的查询命令：命中时应答
    /// 记录快照，ID非法时应答结构化错误载荷，未知ID应答
    /// 未找到。任何其他文本重复十次后回显。应答从不关闭
    /// 连接。
    pub async fn handle_message(&self, text: &str) -> String {
        let Some(raw_id) = text.strip_prefix(GET_PRODUCT_PREFIX) else {
            return text.repeat(ECHO_REPEAT);
        };

        let id: i32 = match raw_id.trim().parse() {
            Ok(id) => id,
            Err(_) => {
                return r#"{"error": "Invalid product request format"}"#.to_string();
            }
        };

        match self.repository.find_by_id(id).await {
            Ok(Some(product)) => match serde_json::to_string(&BroadcastEvent::from(&product)) {
                Ok(payload) => payload,
                Err(e) => {
                    error!(product_id = id, "Failed to serialize product reply: {}", e);
                    r#"{"error": "Product not found"}"#.to_string()
                }
            },
            Ok(None) => r#"{"error": "Product not found"}"#.to_string(),
            Err(e) => {
                // The channel never surfaces internal errors to subscribers
                error!(product_id = id, "Product lookup failed: {}", e);
                r#"{"error": "Product not found"}"#.to_string()
            }
        }
    }
}
