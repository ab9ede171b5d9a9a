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

use crate::cache::ViewCache;
use crate::service::CharacterService;
use crate::store::CharacterStore;
use std::sync::Arc;

/// Server context containing shared resources
#[derive(Clone)]
pub struct ServerContext {
    /// Character service used by every route
    pub character_service: Arc<CharacterService>,

    /// Rendered view cache, revalidated by the service after writes
    pub view_cache: Arc<ViewCache>,
}

impl ServerContext {
    /// Create a new server context
    pub fn new(store: Arc<dyn CharacterStore>, view_cache: ViewCache) -> Self {
        let view_cache = Arc::new(view_cache);
        let character_service = Arc::new(CharacterService::new(store, Arc::clone(&view_cache)));

        Self {
            character_service,
            view_cache,
        }
    }

    /// Get the character service
    pub fn character_service(&self) -> &Arc<CharacterService> {
        &self.character_service
    }

    /// Get the view cache
    pub fn view_cache(&self) -> &Arc<ViewCache> {
        &self.view_cache
    }
}
