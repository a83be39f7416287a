//! Document assembly and canonical JSON rendering.

use clr_model::{Document, PaletteSet, TransformedPalette};
use tracing::debug;

use crate::error::{Result, TransformError};

/// Builds the output document from every palette in `set`.
///
/// Palettes are ordered by case-insensitive name; names that differ only
/// in case fall back to a byte-wise comparison so the order stays total.
pub fn assemble(set: PaletteSet) -> Document {
    let mut palettes: Vec<TransformedPalette> = set.into_iter().collect();
    palettes.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
    });
    debug!(palettes = palettes.len(), "document assembled");
    Document::new(palettes)
}

/// Builds a document holding only the palette called `name`.
pub fn assemble_single(mut set: PaletteSet, name: &str) -> Result<Document> {
    let palette = set
        .remove(name)
        .ok_or_else(|| TransformError::PaletteNotFound {
            name: name.to_string(),
        })?;
    Ok(Document::new(vec![palette]))
}

/// Renders `document` as pretty-printed JSON with sorted object keys.
pub fn render_json(document: &Document) -> Result<String> {
    // serde_json's Map is BTreeMap-backed, so going through Value sorts keys
    // at every level.
    let value = serde_json::to_value(document)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
