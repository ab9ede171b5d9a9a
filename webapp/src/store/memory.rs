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

use super::CharacterStore;
use crate::error::StoreResult;
use async_trait::async_trait;
use roster_common::{Character, CharacterId, NewCharacter};
use tokio::sync::RwLock;

/// In-memory character store, kept in insertion order
#[derive(Debug, Default)]
pub struct MemoryCharacterStore {
    characters: RwLock<Vec<Character>>,
}

impl MemoryCharacterStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterStore for MemoryCharacterStore {
    async fn list_characters(&self) -> StoreResult<Vec<Character>> {
        Ok(self.characters.read().await.clone())
    }

    async fn get_character(&self, id: CharacterId) -> StoreResult<Option<Character>> {
        Ok(self
            .characters
            .read()
            .await
            .iter()
            .find(|character| character.id == id)
            .cloned())
    }

    async fn insert_character(&self, character: &NewCharacter) -> StoreResult<Character> {
        let character = Character::with_defaults(CharacterId::new(), character.name.clone());
        self.characters.write().await.push(character.clone());
        Ok(character)
    }
}
