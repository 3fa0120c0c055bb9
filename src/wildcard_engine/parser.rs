//! Line-level parsing shared by named sets and inline tokens.
//!
//! Both grammars are the same `weight:value` shape and differ only in the
//! default weight: a bare source line carries 100, a bare inline alternative
//! carries 1.

use crate::wildcard_engine::models::OptionEntry;

/// Weight of a named-set line without an explicit `weight:` prefix.
pub const DEFAULT_SET_WEIGHT: u32 = 100;

/// Weight of an inline alternative without an explicit `weight:` prefix.
pub const DEFAULT_INLINE_WEIGHT: u32 = 1;

/// Character separating alternatives inside an inline token.
pub const ALTERNATIVES_SEPARATOR: char = '|';

/// Parse a raw text source into its ordered entry list.
///
/// Lines are trimmed; blank lines and lines whose value reduces to empty
/// are dropped silently. Surviving entries keep the input line order, and
/// duplicate values with different weights are kept as-is.
///
/// Pure and deterministic: the same text always parses to the same list.
pub fn parse_source(text: &str) -> Vec<OptionEntry> {
    text.lines()
        .filter_map(|line| parse_weighted(line, DEFAULT_SET_WEIGHT))
        .collect()
}

/// Parse the content of an inline token (`rusty|4:shiny| dull `) into its
/// alternatives, dropping the ones that reduce to an empty value.
pub fn parse_inline_alternatives(content: &str) -> Vec<OptionEntry> {
    content
        .split(ALTERNATIVES_SEPARATOR)
        .filter_map(|alt| parse_weighted(alt, DEFAULT_INLINE_WEIGHT))
        .collect()
}

/// Parse one line or alternative.
///
/// A leading run of digits followed by optional spaces and `:` is the
/// weight; the trimmed remainder is the value. Anything else is a bare
/// value at `default_weight`. Returns `None` when the value is empty.
fn parse_weighted(raw: &str, default_weight: u32) -> Option<OptionEntry> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some((prefix, rest)) = s.split_once(':') {
        let digits = prefix.trim_end();
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            let value = rest.trim();
            if value.is_empty() {
                return None;
            }
            return Some(OptionEntry {
                value: value.to_string(),
                // Falls back to the default when the digits overflow.
                weight: digits.parse().unwrap_or(default_weight),
                raw: s.to_string(),
            });
        }
    }

    Some(OptionEntry {
        value: s.to_string(),
        weight: default_weight,
        raw: s.to_string(),
    })
}
