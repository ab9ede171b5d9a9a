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

//! Shared character types

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Default attack assigned by the store on creation
pub const DEFAULT_ATTACK: i32 = 0;

/// Default defense assigned by the store on creation
pub const DEFAULT_DEFENSE: i32 = 0;

/// Default health points assigned by the store on creation
pub const DEFAULT_HEALTH_POINTS: i32 = 0;

/// Default experience assigned by the store on creation
pub const DEFAULT_EXPERIENCE: i32 = 0;

/// Opaque character identifier, generated by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type), sqlx(transparent))]
pub struct CharacterId(Uuid);

impl CharacterId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for CharacterId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A game character and its stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub attack: i32,
    pub defense: i32,
    pub health_points: i32,
    pub experience: i32,
}

impl Character {
    /// Build a character carrying the store defaults for every stat.
    pub fn with_defaults(id: CharacterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attack: DEFAULT_ATTACK,
            defense: DEFAULT_DEFENSE,
            health_points: DEFAULT_HEALTH_POINTS,
            experience: DEFAULT_EXPERIENCE,
        }
    }
}

/// Fields supplied by the creator of a character
///
/// Stats are never supplied here; the store assigns them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCharacter {
    pub name: String,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
