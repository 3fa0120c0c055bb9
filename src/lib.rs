//! # wildcard_gen
//!
//! A fully offline, deterministic wildcard-expansion engine.
//!
//! This library turns a template string containing `<placeholder>` tokens
//! and a set of named, weighted option lists into a concrete string. Each
//! token resolves through a weighted random draw, drawn values may
//! themselves contain tokens, and substitution passes repeat until the text
//! stabilises or an iteration budget runs out.
//!
//! ## How it works
//!
//! 1. Parse each raw text source with [`parse_source`] and store it in a
//!    [`WildcardLibrary`] under a symbolic name — or point
//!    [`WildcardLibrary::load_dir`] at a directory of `.txt` files and get
//!    one set per file, named after the file stem.
//! 2. Build a [`GenerateRequest`] with a template, an optional RNG seed, and
//!    an iteration cap.
//! 3. Call [`generate_text`] — the engine scans `<name>` references and
//!    `<a|b|4:c>` inline alternatives pass by pass, draws proportionally to
//!    the weights, and substitutes until no token is left. If the cap runs
//!    out first, the best-effort text comes back with `fully_resolved:
//!    false` so the caller can decide whether to flag it.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same expansion every time — useful for tests and for replaying a
//!   result a user liked.
//! - **Best effort by design**: unknown names, empty sets, and malformed
//!   tokens expand to the empty string instead of failing. The only hard
//!   errors are an empty template and an empty library
//!   ([`GenerateError`]).
//! - **Round-trip editing**: a parsed set can be turned back into its
//!   editable text block with each entry's original line preserved, and
//!   swapped back in with [`WildcardLibrary::replace_source`].
//!
//! ## Quick start
//!
//! ```rust
//! use wildcard_gen::{generate_text, parse_source, GenerateRequest, WildcardLibrary};
//!
//! let mut library = WildcardLibrary::new();
//! library.replace("animal", parse_source("cat\n25:dog\nfennec fox"));
//! library.replace("mood", parse_source("sleepy\ngrumpy\n5:ecstatic"));
//!
//! let outcome = generate_text(
//!     GenerateRequest {
//!         template: "a <mood> <animal>, feeling <calm|2:wild>".into(),
//!         max_iterations: 30,
//!         rng_seed: Some(42),
//!     },
//!     &library,
//! )
//! .unwrap();
//!
//! assert!(outcome.fully_resolved);
//! println!("{}", outcome.text);
//! ```

pub mod client_adapter;
pub mod wildcard_engine;

// Convenience re-exports so callers can use `wildcard_gen::generate_text`
// directly without reaching into `wildcard_engine::`.
pub use client_adapter::{editor_state, to_client_state};
pub use wildcard_engine::{
    generate_text, parse_inline_alternatives, parse_source, pick_weighted, resolve,
    GenerateError, GenerateRequest, GeneratedText, OptionEntry, WildcardLibrary,
    ALTERNATIVES_SEPARATOR, DEFAULT_INLINE_WEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_SET_WEIGHT,
    TEMPLATE_SET,
};
