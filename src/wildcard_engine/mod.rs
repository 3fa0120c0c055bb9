//! Core wildcard engine — option-set parsing, weighted drawing, and template
//! resolution.
//!
//! ## Module overview
//!
//! | Module     | Purpose |
//! |------------|---------|
//! | `models`   | Shared types: entries, request/response structs, errors |
//! | `parser`   | Line-level `weight:value` parsing for sets and inline tokens |
//! | `picker`   | Weighted proportional draw over an entry list |
//! | `resolver` | Single entry point `generate_text()` and the pass loop |
//! | `library`  | Named set store, round-trip editing, directory loading |

pub mod library;
pub mod models;
pub mod parser;
pub mod picker;
pub mod resolver;

// Re-export the public API surface so callers can use
// `wildcard_engine::generate_text` without reaching into sub-modules.
pub use library::{WildcardLibrary, TEMPLATE_SET};
pub use models::{
    GenerateError, GenerateRequest, GeneratedText, OptionEntry, DEFAULT_MAX_ITERATIONS,
};
pub use parser::{
    parse_inline_alternatives, parse_source, ALTERNATIVES_SEPARATOR, DEFAULT_INLINE_WEIGHT,
    DEFAULT_SET_WEIGHT,
};
pub use picker::pick_weighted;
pub use resolver::{generate_text, resolve};
