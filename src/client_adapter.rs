//! Maps engine types to the JSON payloads a browser client renders.
//!
//! The shapes mirror the three panes of the generator page: the source-file
//! list, the template dropdown, and the result area. Keeping the mapping
//! here leaves the engine types free of display concerns.

use serde_json::{json, Value};

use crate::wildcard_engine::{GeneratedText, WildcardLibrary};

/// Listing row for one set. The label matches the client's file buttons,
/// e.g. `"animals (12)"`.
fn set_row(name: &str, entry_count: usize) -> Value {
    json!({
        "name": name,
        "file_name": format!("{name}.txt"),
        "entry_count": entry_count,
        "label": format!("{name} ({entry_count})"),
    })
}

/// Result pane block, or null before the first generation.
fn result_block(result: Option<&GeneratedText>) -> Value {
    match result {
        Some(r) => json!({
            "text": r.text,
            "passes": r.passes,
            "fully_resolved": r.fully_resolved,
        }),
        None => Value::Null,
    }
}

/// Map a library (and optionally the latest generation outcome) to one JSON
/// object for the client: sorted set listing, template dropdown choices,
/// and the result pane.
pub fn to_client_state(library: &WildcardLibrary, result: Option<&GeneratedText>) -> Value {
    let sets: Vec<Value> = library
        .names()
        .into_iter()
        .map(|name| set_row(name, library.entries(name).map_or(0, <[_]>::len)))
        .collect();

    json!({
        "sets": sets,
        "template_choices": library.template_choices(),
        "result": result_block(result),
    })
}

/// Editor payload for one set: the display file name plus the round-tripped
/// text block. Null when the set does not exist.
pub fn editor_state(library: &WildcardLibrary, name: &str) -> Value {
    match library.source_text(name) {
        Some(text) => json!({
            "name": name,
            "file_name": format!("{name}.txt"),
            "text": text,
        }),
        None => Value::Null,
    }
}
