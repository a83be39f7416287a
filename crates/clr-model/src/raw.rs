//! Palettes as produced by a decoder, before any transformation.

use crate::sample::RawColorSample;

/// One keyed color of a decoded palette.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPaletteEntry {
    /// Key under which the color was stored in the source file.
    pub key: String,
    /// Resolved components, or `None` when the color could not be looked up.
    pub sample: Option<RawColorSample>,
    /// Accessibility label attached to the color (empty when absent).
    pub accessibility_label: String,
}

impl RawPaletteEntry {
    pub fn new(key: impl Into<String>, sample: Option<RawColorSample>) -> Self {
        Self {
            key: key.into(),
            sample,
            accessibility_label: String::new(),
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.accessibility_label = label.into();
        self
    }
}

/// A decoded palette in authoring order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPalette {
    /// Palette name (source file stem, case preserved).
    pub name: String,
    pub entries: Vec<RawPaletteEntry>,
}

impl RawPalette {
    pub fn new(name: impl Into<String>, entries: Vec<RawPaletteEntry>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    pub fn push(&mut self, entry: RawPaletteEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries whose color could not be resolved.
    pub fn unresolvable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.sample.is_none()).count()
    }
}
