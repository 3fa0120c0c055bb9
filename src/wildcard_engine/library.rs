//! Caller-owned store of named option sets.
//!
//! The library is an explicit value passed into every resolver call — there
//! is no ambient registry. Reload semantics are full-swap: per set via
//! [`WildcardLibrary::replace`], or for the whole library by building a
//! fresh one with [`WildcardLibrary::load_dir`] and replacing the old value.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use crate::wildcard_engine::models::OptionEntry;
use crate::wildcard_engine::parser::{parse_source, DEFAULT_SET_WEIGHT};

/// Name of the reserved set whose entries double as selectable templates.
pub const TEMPLATE_SET: &str = "template";

/// Mapping from a set name (for file sources, the file stem) to its ordered
/// weighted entries.
///
/// Selection never depends on the mapping order, so sets live in a
/// `HashMap`; entry order *inside* a set is preserved for display and
/// editing. [`WildcardLibrary::names`] sorts for stable listings.
#[derive(Debug, Clone, Default)]
pub struct WildcardLibrary {
    sets: HashMap<String, Vec<OptionEntry>>,
}

impl WildcardLibrary {
    pub fn new() -> Self {
        WildcardLibrary::default()
    }

    /// Associate `name` with `entries`, discarding any prior association.
    pub fn replace(&mut self, name: impl Into<String>, entries: Vec<OptionEntry>) {
        self.sets.insert(name.into(), entries);
    }

    /// Parse `text` and swap it in as the entries of `name`.
    pub fn replace_source(&mut self, name: impl Into<String>, text: &str) {
        self.replace(name, parse_source(text));
    }

    /// The entries of `name`, or `None` when no such set exists.
    pub fn entries(&self, name: &str) -> Option<&[OptionEntry]> {
        self.sets.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    /// Set names, sorted for display.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.sets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Rebuild the editable text block for `name`.
    ///
    /// Per entry: the original `raw` line when one was kept; otherwise the
    /// bare value when the weight is the set default, else `weight:value`.
    /// Round-trips parsed sources verbatim (dropped lines excepted).
    pub fn source_text(&self, name: &str) -> Option<String> {
        let entries = self.sets.get(name)?;
        let lines: Vec<String> = entries
            .iter()
            .map(|e| {
                if !e.raw.is_empty() {
                    e.raw.clone()
                } else if e.weight == DEFAULT_SET_WEIGHT {
                    e.value.clone()
                } else {
                    format!("{}:{}", e.weight, e.value)
                }
            })
            .collect();
        Some(lines.join("\n"))
    }

    /// Selectable templates: the entries of the reserved [`TEMPLATE_SET`],
    /// original line preferred over the parsed value. Empty when the set is
    /// absent or empty.
    pub fn template_choices(&self) -> Vec<String> {
        match self.sets.get(TEMPLATE_SET) {
            Some(entries) => entries
                .iter()
                .map(|e| {
                    if e.raw.is_empty() {
                        e.value.clone()
                    } else {
                        e.raw.clone()
                    }
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// Build a library from every `*.txt` file directly inside `dir`
    /// (extension match is case-insensitive, no recursion). The set name is
    /// the file stem.
    ///
    /// A file that cannot be read is logged and skipped — it only drops its
    /// own set, never the ones parsed from the other files.
    pub fn load_dir(dir: &Path) -> io::Result<Self> {
        let mut library = WildcardLibrary::new();

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let is_txt = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("txt"));
            if !is_txt {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match fs::read_to_string(&path) {
                Ok(text) => library.replace_source(stem, &text),
                Err(err) => log::warn!("skipping {}: {}", path.display(), err),
            }
        }

        log::debug!(
            "loaded {} wildcard set(s) from {}",
            library.len(),
            dir.display()
        );
        Ok(library)
    }
}
