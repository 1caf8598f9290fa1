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

use crate::domain::models::product::{NewProduct, Product};
use crate::domain::repositories::product_repository::{ProductRepository, RepositoryError};
use crate::infrastructure::database::entities::product as product_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 商品仓库实现
pub struct ProductRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl ProductRepositoryImpl {
    /// 创建新的商品仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    ///
    /// # 返回值
    ///
    /// 返回新的商品仓库实例
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_domain(model: product_entity::Model) -> Product {
        Product {
            id: model.id,
            name: model.name,
            price: model.price,
            created_at: model.created_at,
        }
    }

    fn to_active(product: NewProduct) -> product_entity::ActiveModel {
        product_entity::ActiveModel {
            name: Set(product.name),
            price: Set(product.price),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryImpl {
    async fn insert(&self, product: NewProduct) -> Result<Product, RepositoryError> {
        let model = Self::to_active(product).insert(self.db.as_ref()).await?;
        Ok(Self::to_domain(model))
    }

    async fn insert_batch(
        &self,
        products: Vec<NewProduct>,
    ) -> Result<Vec<Product>, RepositoryError> {
        // One page batch is one write unit, no partial pages
        let txn = self.db.begin().await?;

        let mut stored = Vec::with_capacity(products.len());
        for product in products {
            let model = Self::to_active(product).insert(&txn).await?;
            stored.push(Self::to_domain(model));
        }

        txn.commit().await?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        let model = product_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Self::to_domain))
    }

    async fn update(&self, id: i32, product: NewProduct) -> Result<Product, RepositoryError> {
        let model = product_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let mut active: product_entity::ActiveModel = model.into();
        active.name = Set(product.name);
        active.price = Set(product.price);

        let updated = active.update(self.db.as_ref()).await?;
        Ok(Self::to_domain(updated))
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = product_entity::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let models = product_entity::Entity::find()
            .order_by_asc(product_entity::Column::Id)
            .all(self.db.as_ref())
            .await?;
        Ok(models.into_iter().map(Self::to_domain).collect())
    }
}
