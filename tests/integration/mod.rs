// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod helpers;

pub mod health_check;
pub mod ingestion_test;
pub mod ws_test;
