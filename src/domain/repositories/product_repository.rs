// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::product::{NewProduct, Product};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 商品仓库特质
///
/// 定义商品记录数据访问接口。爬取管道在摄取期间写入，
/// 订阅者查询与CRUD表面在请求期间读取。
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// 插入单条记录，返回存储层分配标识符后的完整记录
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError>;
    /// 在单个事务中插入一批记录（一页为一个写入单元）
    async fn insert_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, RepositoryError>;
    /// 根据ID查找记录
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    /// 整体替换记录的名称与价格
    async fn update(&self, id: i32, product: NewProduct) -> Result<Product, RepositoryError>;
    /// 删除记录
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    /// 列出全部记录
    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError>;
}
