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

//! Rendered view cache keyed by route path
//!
//! Pages are rendered once and served from memory until their route is
//! revalidated or their TTL expires. Every revalidation bumps a generation
//! counter, and a view rendered under an older generation is never served,
//! so a render racing with a revalidation cannot resurrect stale content.

use crate::config::CacheConfig;
use moka::future::Cache;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Clone)]
struct CachedView {
    generation: u64,
    body: Arc<str>,
}

/// Cache of rendered pages
pub struct ViewCache {
    /// Rendered pages by route path
    views: Cache<String, CachedView>,

    /// Bumped on every revalidation
    generation: AtomicU64,

    /// When false every lookup renders
    enabled: bool,
}

impl std::fmt::Debug for ViewCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewCache")
            .field("views", &"Cache<String, CachedView>")
            .field("generation", &self.generation)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl ViewCache {
    /// Create a view cache
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            views: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
            generation: AtomicU64::new(0),
            enabled: true,
        }
    }

    /// Create a view cache that never stores anything
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new(0, Duration::from_secs(1))
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        if !config.enabled {
            tracing::info!("View cache disabled");
            return Self::disabled();
        }
        tracing::info!(
            max_capacity = config.max_capacity,
            ttl_seconds = config.ttl_seconds,
            "View cache initialized"
        );
        Self::new(config.max_capacity, Duration::from_secs(config.ttl_seconds))
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current generation; changes after every revalidation.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Serve the cached view for `path`, or render and cache it.
    ///
    /// Render errors are returned as is and nothing is cached.
    pub async fn get_or_render<F, Fut, E>(&self, path: &str, render: F) -> Result<Arc<str>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String, E>>,
    {
        if !self.enabled {
            return render().await.map(Arc::from);
        }

        // Captured before rendering so that a revalidation during the render
        // leaves the result behind an older generation.
        let generation = self.generation();
        if let Some(view) = self.views.get(path).await
            && view.generation == generation
        {
            tracing::debug!(path, generation, "View cache hit");
            return Ok(view.body);
        }

        tracing::debug!(path, generation, "View cache miss, rendering");
        let body: Arc<str> = Arc::from(render().await?);
        self.views
            .insert(
                path.to_string(),
                CachedView {
                    generation,
                    body: Arc::clone(&body),
                },
            )
            .await;
        Ok(body)
    }

    /// Drop the cached view for `path` so the next request renders it again.
    pub async fn revalidate_path(&self, path: &str) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.views.invalidate(path).await;
        tracing::info!(path, generation, "View revalidated");
    }
}
