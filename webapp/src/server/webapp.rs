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

pub mod views;

use crate::context::ServerContext;
use crate::error::WebappError;
pub use crate::service::CHARACTERS_PATH;
use axum::Router;
use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

/// Submitted by the creation form on the list page
#[derive(Debug, Deserialize)]
pub struct CreateCharacterForm {
    pub name: String,
}

pub fn router(context: &ServerContext) -> Router {
    Router::new()
        .route("/", get(index))
        .route(CHARACTERS_PATH, get(list_characters).post(create_character))
        .route("/characters/{id}", get(character_detail))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(context.clone())
}

async fn index() -> Redirect {
    Redirect::permanent(CHARACTERS_PATH)
}

async fn list_characters(
    State(context): State<ServerContext>,
) -> Result<Html<String>, WebappError> {
    let service = context.character_service();
    let page = context
        .view_cache()
        .get_or_render(CHARACTERS_PATH, move || async move {
            let characters = service.list_characters().await?;
            Ok::<_, WebappError>(views::render_character_list(&characters))
        })
        .await?;
    Ok(Html(page.to_string()))
}

async fn create_character(
    State(context): State<ServerContext>,
    Form(form): Form<CreateCharacterForm>,
) -> Result<Redirect, WebappError> {
    context
        .character_service()
        .create_character(&form.name)
        .await?;
    Ok(Redirect::to(CHARACTERS_PATH))
}

async fn character_detail(
    State(context): State<ServerContext>,
    Path(id): Path<String>,
) -> Result<Response, WebappError> {
    match context.character_service().get_character(&id).await? {
        Some(character) => Ok(Html(views::render_character_detail(&character)).into_response()),
        None => Ok((
            StatusCode::NOT_FOUND,
            Html(views::render_character_not_found()),
        )
            .into_response()),
    }
}

async fn health_check() -> &'static str {
    "OK"
}
