//! HTTP facade over `wildcard_gen`.
//!
//! Serves the generator to a browser client: load a directory of `.txt`
//! wildcard sources, expand templates on demand, edit sources round-trip,
//! and reload the whole library with a full swap.
//!
//! Run with: `wildcard_gen_service [source_dir]` (default `./wildcards`).

use std::io;
use std::path::PathBuf;

use wildcard_gen::WildcardLibrary;

mod wildcard;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("\nError: {err}");
        std::process::exit(1);
    }
}

async fn run() -> io::Result<()> {
    let source_dir = PathBuf::from(
        std::env::args().nth(1).unwrap_or_else(|| "wildcards".to_string()),
    );

    // Start with whatever loads; an unreadable directory just means an
    // empty library until the first successful reload.
    let library = match WildcardLibrary::load_dir(&source_dir) {
        Ok(library) => library,
        Err(err) => {
            log::warn!("could not load {}: {err}", source_dir.display());
            WildcardLibrary::new()
        }
    };
    log::info!(
        "serving {} wildcard set(s) from {}",
        library.len(),
        source_dir.display()
    );

    let state = wildcard::handler::new_state(source_dir, library);
    let app = wildcard::routes::router(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
    log::info!("listening on 0.0.0.0:3000");
    axum::serve(listener, app).await
}
