//! Display-name resolution for palette entries.
//!
//! A color keeps its source key as display name unless the key is itself a
//! hex color and the color carries an accessibility label, in which case the
//! title-cased label is used. Repeated names within one palette get a
//! numeric suffix starting at `2`: `Red`, `Red 2`, `Red 3`. Suffixes are
//! counted per candidate name only, so a source key that already reads
//! `Red 2` can share its title with a suffixed `Red`.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// 3- or 6-digit hex color, optionally prefixed with `#`.
static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9A-Fa-f]{3}|[0-9A-Fa-f]{6})$").expect("Invalid hex color regex")
});

/// Returns true if `value` looks like a hex color key (`#1a2b3c`, `1A2`).
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX.is_match(value)
}

/// Lowercases `value` and capitalizes the first letter of each
/// space-separated word.
///
/// Runs of spaces collapse to one; leading and trailing spaces are dropped.
pub fn title_case(value: &str) -> String {
    value
        .to_lowercase()
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Outcome of resolving one entry's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTitle {
    /// Unique (per palette) display name.
    pub title: String,
    /// Title-cased accessibility label.
    pub description: String,
}

/// Per-palette title resolver.
///
/// Holds the occurrence count of every candidate title seen so far. Create
/// one resolver per palette; counts must not carry over between palettes.
#[derive(Debug, Default)]
pub struct TitleResolver {
    counts: HashMap<String, usize>,
}

impl TitleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the display name of the next entry in source order.
    pub fn resolve(&mut self, key: &str, accessibility_label: &str) -> ResolvedTitle {
        let description = title_case(accessibility_label);

        let candidate = if is_hex_color(key) && !accessibility_label.is_empty() {
            description.clone()
        } else {
            key.to_string()
        };

        let count = self.counts.entry(candidate.clone()).or_insert(0);
        *count += 1;
        let title = if *count == 1 {
            candidate
        } else {
            format!("{candidate} {count}")
        };

        ResolvedTitle { title, description }
    }

    /// Number of times `candidate` has been seen.
    pub fn occurrences(&self, candidate: &str) -> usize {
        self.counts.get(candidate).copied().unwrap_or(0)
    }
}
