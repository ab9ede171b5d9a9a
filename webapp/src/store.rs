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

//! Character storage
//!
//! [`CharacterStore`] is the only way the service reaches persisted
//! characters. Implementations:
//! - [`postgres::PgCharacterStore`]: the `characters` table via sqlx
//! - [`memory::MemoryCharacterStore`]: a process-local list

pub mod memory;
pub mod postgres;

use crate::error::StoreResult;
use async_trait::async_trait;
use roster_common::{Character, CharacterId, NewCharacter};

pub use memory::MemoryCharacterStore;
pub use postgres::PgCharacterStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    /// All characters, in whatever order the backend yields them.
    async fn list_characters(&self) -> StoreResult<Vec<Character>>;

    /// The character with exactly this id, if any.
    async fn get_character(&self, id: CharacterId) -> StoreResult<Option<Character>>;

    /// Insert a row and return it with its generated id and default stats.
    async fn insert_character(&self, character: &NewCharacter) -> StoreResult<Character>;
}
