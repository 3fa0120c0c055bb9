use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Option entries
// ---------------------------------------------------------------------------

/// One weighted expansion choice, parsed from a source line or an inline
/// alternative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Literal text this entry expands to. Never empty after parsing —
    /// lines that reduce to an empty value are dropped, not stored.
    pub value: String,
    /// Probability mass relative to the other entries in the same list.
    pub weight: u32,
    /// Trimmed source line, kept so a set can be turned back into its
    /// editable text. Empty for entries built programmatically.
    pub raw: String,
}

impl OptionEntry {
    /// Entry with the given value and weight and no source line.
    pub fn new(value: impl Into<String>, weight: u32) -> Self {
        OptionEntry {
            value: value.into(),
            weight,
            raw: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Generation request / response types
// ---------------------------------------------------------------------------

/// Substitution passes the resolver runs before giving up on a template
/// that keeps reintroducing placeholders.
pub const DEFAULT_MAX_ITERATIONS: usize = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Template text containing `<name>` and `<a|b|2:c>` tokens.
    pub template: String,
    /// Upper bound on substitution passes.
    pub max_iterations: usize,
    /// `Some(seed)` makes the expansion fully reproducible; `None` seeds
    /// from entropy.
    pub rng_seed: Option<u64>,
}

impl GenerateRequest {
    /// Request with the default iteration cap and an entropy-seeded rng.
    pub fn new(template: impl Into<String>) -> Self {
        GenerateRequest {
            template: template.into(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            rng_seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedText {
    /// The expanded text. May still contain placeholder syntax when the
    /// iteration cap ran out first.
    pub text: String,
    /// Substitution passes performed, including the final pass that found
    /// nothing to replace.
    pub passes: usize,
    /// False when the cap was reached with tokens left in the text.
    pub fully_resolved: bool,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Precondition failures checked before resolution starts.
///
/// These are the only hard errors the engine raises. Everything else —
/// unknown names, empty sets, malformed tokens — degrades to empty-string
/// substitution inside the resolver, since malformed user-authored wildcard
/// data must never block generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("template is empty")]
    EmptyTemplate,
    #[error("no wildcard sets loaded")]
    NoSetsLoaded,
}
