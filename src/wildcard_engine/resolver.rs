//! Pass-based template resolution.
//!
//! Each pass scans the template as it was *before* the pass: every token is
//! located against the pre-pass text and substituted independently, so a
//! drawn value that itself contains delimiter characters is only seen by the
//! next pass. That ordering is what makes nested placeholders resolve one
//! level per pass instead of mid-scan.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::wildcard_engine::library::WildcardLibrary;
use crate::wildcard_engine::models::{GenerateError, GenerateRequest, GeneratedText};
use crate::wildcard_engine::parser::{parse_inline_alternatives, ALTERNATIVES_SEPARATOR};
use crate::wildcard_engine::picker::pick_weighted;

const TOKEN_OPEN: char = '<';
const TOKEN_CLOSE: char = '>';

/// Single entry point: expand `request.template` against `library`.
///
/// Fails fast on the two bad preconditions — an empty template and a library
/// with no sets at all. Every other irregularity (unknown names, empty sets,
/// malformed inline syntax) degrades to empty-string substitution.
pub fn generate_text(
    request: GenerateRequest,
    library: &WildcardLibrary,
) -> Result<GeneratedText, GenerateError> {
    if request.template.is_empty() {
        return Err(GenerateError::EmptyTemplate);
    }
    if library.is_empty() {
        return Err(GenerateError::NoSetsLoaded);
    }

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let out = resolve(&mut rng, library, &request.template, request.max_iterations);
    log::debug!(
        "resolved template in {} pass(es), fully_resolved={}",
        out.passes,
        out.fully_resolved
    );
    Ok(out)
}

/// Run substitution passes until a pass finds no token, or `max_iterations`
/// passes have run. The rng is generic so tests can pin every draw.
///
/// Stateless: the library is read as an immutable snapshot and nothing is
/// carried over between calls. Reaching the cap with tokens left is a
/// bounded-effort outcome, not an error — the text is returned as-is with
/// `fully_resolved` set to false.
pub fn resolve<R: Rng>(
    rng: &mut R,
    library: &WildcardLibrary,
    template: &str,
    max_iterations: usize,
) -> GeneratedText {
    let mut current = template.to_string();
    let mut passes = 0;

    while passes < max_iterations {
        let (next, replaced) = substitute_pass(rng, library, &current);
        passes += 1;
        current = next;
        if !replaced {
            break;
        }
    }

    let fully_resolved = !contains_token(&current);
    GeneratedText {
        text: current,
        passes,
        fully_resolved,
    }
}

/// One left-to-right scan over `input`.
///
/// A token is the shortest `<` … `>` span with at least one character and no
/// nested delimiter inside: a later `<` abandons the earlier candidate (the
/// abandoned text is copied through verbatim), and `<>` is not a token.
/// Returns the rewritten string and whether any token was substituted —
/// substitution to the empty string counts.
fn substitute_pass<R: Rng>(
    rng: &mut R,
    library: &WildcardLibrary,
    input: &str,
) -> (String, bool) {
    let mut out = String::with_capacity(input.len());
    let mut replaced = false;
    // Byte index of the `<` currently open, and of the first byte not yet
    // copied into `out`.
    let mut candidate: Option<usize> = None;
    let mut copied = 0;

    for (i, ch) in input.char_indices() {
        match ch {
            TOKEN_OPEN => candidate = Some(i),
            TOKEN_CLOSE => {
                if let Some(start) = candidate {
                    if i > start + 1 {
                        out.push_str(&input[copied..start]);
                        out.push_str(&substitute_token(rng, library, &input[start + 1..i]));
                        replaced = true;
                        copied = i + TOKEN_CLOSE.len_utf8();
                    }
                    candidate = None;
                }
            }
            _ => {}
        }
    }

    out.push_str(&input[copied..]);
    (out, replaced)
}

/// Expand one token's content.
///
/// Content containing the alternatives separator is an inline option list;
/// anything else is a set name. Both fall back to the empty string when
/// there is nothing to draw from.
fn substitute_token<R: Rng>(rng: &mut R, library: &WildcardLibrary, content: &str) -> String {
    let key = content.trim();

    if key.contains(ALTERNATIVES_SEPARATOR) {
        let alternatives = parse_inline_alternatives(key);
        return pick_weighted(rng, &alternatives).unwrap_or_default().to_string();
    }

    match library.entries(key) {
        Some(entries) if !entries.is_empty() => {
            pick_weighted(rng, entries).unwrap_or_default().to_string()
        }
        _ => String::new(),
    }
}

/// Whether `input` still contains placeholder syntax a pass would match.
pub(crate) fn contains_token(input: &str) -> bool {
    let mut candidate: Option<usize> = None;
    for (i, ch) in input.char_indices() {
        match ch {
            TOKEN_OPEN => candidate = Some(i),
            TOKEN_CLOSE => {
                if let Some(start) = candidate {
                    if i > start + 1 {
                        return true;
                    }
                    candidate = None;
                }
            }
            _ => {}
        }
    }
    false
}
