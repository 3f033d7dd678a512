// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::Path;
use axum::extract::State;
use axum::http::HeaderName;
use axum::http::StatusCode;
use axum::http::header::CACHE_CONTROL;
use axum::http::header::CONTENT_TYPE;
use axum::response::Html;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::net::TcpStream;
use tokio::time::sleep;

use crate::cmd::serve::asset::asset_content_type;
use crate::cmd::serve::asset::validate_asset_path;
use crate::cmd::serve::state::ServerState;
use crate::cmd::serve::template::page_template;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;

/// The global the browser bundle reads the set table from.
const SETS_GLOBAL: &str = "allFlashcardSets";

pub struct ServerConfig {
    pub directory: Option<String>,
    pub port: u16,
    pub pkg: PathBuf,
    pub open_browser: bool,
}

pub async fn start_server(config: ServerConfig) -> Fallible<()> {
    let coll = Collection::new(config.directory)?;
    if coll.table.is_empty() {
        return fail("no sets found.");
    }
    log::debug!(
        "Serving {} sets from {}.",
        coll.table.len(),
        coll.directory.display()
    );
    if !config.pkg.join("flashdeck_wasm.js").exists() {
        log::warn!(
            "No browser bundle in {}; build it with `wasm-pack build --target web crates/flashdeck-wasm`.",
            config.pkg.display()
        );
    }

    let state = ServerState {
        sets_script: Arc::new(sets_script(&coll.table.to_json()?)),
        pkg: config.pkg,
    };
    let app = Router::new();
    let app = app.route("/", get(root));
    let app = app.route("/style.css", get(stylesheet));
    let app = app.route("/sets.js", get(sets));
    let app = app.route("/pkg/{*path}", get(bundle_file));
    let app = app.fallback(not_found_handler);
    let app = app.with_state(state);
    let bind = format!("0.0.0.0:{}", config.port);

    if config.open_browser {
        // Start a separate task to open the browser.
        let url = format!("http://localhost:{}/", config.port);
        let probe = bind.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(stream) = TcpStream::connect(&probe).await {
                    drop(stream);
                    break;
                }
                sleep(Duration::from_millis(1)).await;
            }
            if let Err(e) = open::that(&url) {
                log::warn!("Failed to open {url}: {e}");
            }
        });
    }

    log::debug!("Starting server on {bind}");
    let listener = TcpListener::bind(&bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn sets_script(json: &str) -> String {
    format!("window.{SETS_GLOBAL} = {json};\n")
}

async fn root() -> (StatusCode, Html<String>) {
    (StatusCode::OK, Html(page_template().into_string()))
}

async fn stylesheet() -> (StatusCode, [(HeaderName, &'static str); 2], &'static [u8]) {
    let bytes = include_bytes!("style.css");
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, "text/css"),
            (CACHE_CONTROL, "public, max-age=604800, immutable"),
        ],
        bytes,
    )
}

async fn sets(
    State(state): State<ServerState>,
) -> (StatusCode, [(HeaderName, &'static str); 2], String) {
    (
        StatusCode::OK,
        [(CONTENT_TYPE, "text/javascript"), (CACHE_CONTROL, "no-cache")],
        state.sets_script.as_ref().clone(),
    )
}

async fn bundle_file(State(state): State<ServerState>, Path(path): Path<String>) -> Response {
    let Some(content_type) = asset_content_type(&path) else {
        return not_found_handler().await.into_response();
    };
    let file = match validate_asset_path(&state.pkg, &path) {
        Ok(file) => file,
        Err(e) => {
            log::debug!("Rejected bundle path {path:?}: {e:?}");
            return not_found_handler().await.into_response();
        }
    };
    match tokio::fs::read(&file).await {
        Ok(bytes) => (
            StatusCode::OK,
            [(CONTENT_TYPE, content_type), (CACHE_CONTROL, "no-cache")],
            bytes,
        )
            .into_response(),
        Err(e) => {
            log::error!("Failed to read {}: {e}", file.display());
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

async fn not_found_handler() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html("Not Found".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_script() {
        assert_eq!(
            sets_script(r#"{"1":[]}"#),
            "window.allFlashcardSets = {\"1\":[]};\n"
        );
    }
}
