//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Roster Webapp Library
//!
//! This library provides the character listing web application: the
//! character store, the character service, the rendered view cache and the
//! axum router serving the list, detail and creation pages.

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod server;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use cache::ViewCache;
pub use context::ServerContext;
pub use error::{StoreError, StoreResult, WebappError};
pub use service::CharacterService;
pub use store::{CharacterStore, MemoryCharacterStore, PgCharacterStore};
