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

//! Character service: list, look up and create characters

use crate::cache::ViewCache;
use crate::error::StoreResult;
use crate::store::CharacterStore;
use roster_common::{Character, CharacterId, NewCharacter};
use std::sync::Arc;

/// Route of the character list, also the cache key revalidated on create
pub const CHARACTERS_PATH: &str = "/characters";

pub struct CharacterService {
    store: Arc<dyn CharacterStore>,
    views: Arc<ViewCache>,
}

impl CharacterService {
    pub fn new(store: Arc<dyn CharacterStore>, views: Arc<ViewCache>) -> Self {
        Self { store, views }
    }

    /// Every stored character. Order is whatever the store yields.
    pub async fn list_characters(&self) -> StoreResult<Vec<Character>> {
        let characters = self.store.list_characters().await?;
        tracing::debug!(count = characters.len(), "Listed characters");
        Ok(characters)
    }

    /// Look up a character by its route id.
    ///
    /// Ids match exactly: only the canonical spelling of a stored id finds
    /// it. Anything else is reported as absent without reaching the store.
    pub async fn get_character(&self, raw: &str) -> StoreResult<Option<Character>> {
        let id = match raw.parse::<CharacterId>() {
            Ok(id) if id.to_string() == raw => id,
            _ => {
                tracing::debug!(id = raw, "Malformed character id");
                return Ok(None);
            }
        };
        let character = self.store.get_character(id).await?;
        if character.is_none() {
            tracing::debug!(%id, "Character not found");
        }
        Ok(character)
    }

    /// Insert a character with default stats and revalidate the list view.
    ///
    /// The name is stored exactly as given; an empty name is accepted.
    pub async fn create_character(&self, name: &str) -> StoreResult<Character> {
        let character = self.store.insert_character(&NewCharacter::new(name)).await?;
        tracing::info!(id = %character.id, name = %character.name, "Character created");
        self.views.revalidate_path(CHARACTERS_PATH).await;
        Ok(character)
    }
}
