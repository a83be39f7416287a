//! The output document.

use serde::Serialize;

use crate::palette::TransformedPalette;

/// `{"palettes": [ {"<name>": [ {"<title>": "<color>"}, ... ]}, ... ]}`
///
/// Palette order is fixed by whoever builds the document; serialization
/// preserves it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    pub palettes: Vec<TransformedPalette>,
}

impl Document {
    pub fn new(palettes: Vec<TransformedPalette>) -> Self {
        Self { palettes }
    }

    pub fn palette_names(&self) -> impl Iterator<Item = &str> {
        self.palettes.iter().map(|palette| palette.name.as_str())
    }

    /// Total number of color entries across all palettes.
    pub fn entry_count(&self) -> usize {
        self.palettes.iter().map(|palette| palette.entries.len()).sum()
    }
}
