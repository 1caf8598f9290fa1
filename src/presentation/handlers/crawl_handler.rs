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

use crate::domain::models::crawl::CrawlRunStatus;
use crate::workers::manager::CrawlSupervisor;
use axum::{Extension, Json};
use std::sync::Arc;

/// 查询后台爬取任务的当前状态
pub async fn get_crawl_status(
    Extension(supervisor): Extension<Arc<CrawlSupervisor>>,
) -> Json<CrawlRunStatus> {
    Json(supervisor.status())
}
