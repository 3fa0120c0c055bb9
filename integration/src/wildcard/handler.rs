use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use wildcard_gen::{
    editor_state, generate_text, to_client_state, GenerateRequest, WildcardLibrary,
    DEFAULT_MAX_ITERATIONS,
};

// ---------------------------------------------------------------------------
// Shared state: the source directory and the in-memory library
// ---------------------------------------------------------------------------

pub struct AppState {
    pub source_dir: PathBuf,
    pub library: Mutex<WildcardLibrary>,
}

pub type SharedState = Arc<AppState>;

pub fn new_state(source_dir: PathBuf, library: WildcardLibrary) -> SharedState {
    Arc::new(AppState {
        source_dir,
        library: Mutex::new(library),
    })
}

// ---------------------------------------------------------------------------
// Query / body types
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
pub struct GenerateQuery {
    pub template: String,
    pub seed: Option<u64>,
    pub max_iterations: Option<usize>,
}

#[derive(Deserialize)]
pub struct SourceQuery {
    pub name: String,
}

#[derive(Deserialize)]
pub struct SaveSourceRequest {
    pub name: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// GET /api/wildcard/generate?template=...&seed=...&max_iterations=...
// ---------------------------------------------------------------------------

pub async fn generate(
    State(state): State<SharedState>,
    Query(params): Query<GenerateQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let request = GenerateRequest {
        template: params.template,
        max_iterations: params.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
        rng_seed: params.seed,
    };

    // Hold the lock for the whole call so the resolver reads one
    // consistent snapshot even while a reload is pending.
    let library = state.library.lock().unwrap();
    let outcome = generate_text(request, &library).map_err(|err| {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        )
    })?;

    Ok(Json(json!({
        "text":           outcome.text,
        "passes":         outcome.passes,
        "fully_resolved": outcome.fully_resolved,
    })))
}

// ---------------------------------------------------------------------------
// GET /api/wildcard/state
// ---------------------------------------------------------------------------

pub async fn get_state(State(state): State<SharedState>) -> Json<Value> {
    let library = state.library.lock().unwrap();
    Json(to_client_state(&library, None))
}

// ---------------------------------------------------------------------------
// GET /api/wildcard/source?name=...
// ---------------------------------------------------------------------------

pub async fn get_source(
    State(state): State<SharedState>,
    Query(params): Query<SourceQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let library = state.library.lock().unwrap();
    let editor = editor_state(&library, &params.name);
    if editor.is_null() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("Unknown set: {}", params.name) })),
        ));
    }
    Ok(Json(editor))
}

// ---------------------------------------------------------------------------
// POST /api/wildcard/source   body: { name, text }
// ---------------------------------------------------------------------------

pub async fn save_source(
    State(state): State<SharedState>,
    Json(body): Json<SaveSourceRequest>,
) -> Json<Value> {
    let mut library = state.library.lock().unwrap();
    library.replace_source(&body.name, &body.text);
    let count = library.entries(&body.name).map_or(0, <[_]>::len);
    Json(json!({ "name": body.name, "entry_count": count }))
}

// ---------------------------------------------------------------------------
// POST /api/wildcard/reload
// ---------------------------------------------------------------------------

/// Rebuild the whole library from the source directory and swap it in —
/// reload is a full replace, never a merge.
pub async fn reload(
    State(state): State<SharedState>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let fresh = WildcardLibrary::load_dir(&state.source_dir).map_err(|err| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": format!("Reload failed: {err}") })),
        )
    })?;

    let mut library = state.library.lock().unwrap();
    *library = fresh;
    Ok(Json(json!({ "set_count": library.len() })))
}
