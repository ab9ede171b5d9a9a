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

use clap::Parser;
use roster_webapp::config::{Arguments, Configuration, StoreBackend};
use roster_webapp::store::{CharacterStore, MemoryCharacterStore, PgCharacterStore};
use roster_webapp::{ServerContext, ViewCache};
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load arguments from the command line
    let arguments: Arguments = Parser::parse();

    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load environment variables from the env file when present
    if std::path::Path::new(&arguments.env_file).exists() {
        debug!("Loading environment variables from file: {}", arguments.env_file);
        dotenv::from_filename(&arguments.env_file).ok();
    }

    // Load configuration from a file with environment variable substitution
    let config: Configuration = Configuration::load(&arguments.config_file)
        .inspect_err(|err| eprintln!("Configuration load error: {}", err))?;

    debug!("Configuration loaded: {:?}", config);
    info!("Starting Roster Webapp...");

    let store: Arc<dyn CharacterStore> = match config.database.backend {
        StoreBackend::Postgres => {
            let store = PgCharacterStore::connect(&config.database).await?;
            if config.database.migrate {
                store.migrate().await?;
            }
            Arc::new(store)
        }
        StoreBackend::Memory => {
            warn!("Using in-memory character store; characters are lost on restart");
            Arc::new(MemoryCharacterStore::new())
        }
    };

    let context = ServerContext::new(store, ViewCache::from_config(&config.cache));

    let listener = tokio::net::TcpListener::bind(config.webapp.addr.to_addr()).await?;
    info!(
        "Webapp listening on {} ({}:{})",
        config.webapp.addr,
        config.webapp.addr.to_ip(),
        config.webapp.addr.to_port()
    );

    roster_webapp::server::run(listener, context).await?;

    info!("Roster Webapp stopped");
    Ok(())
}
