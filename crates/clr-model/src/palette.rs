//! Transformed palettes and the per-run palette collection.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A color ready for output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorEntry {
    /// Resolved, de-duplicated display name.
    pub title: String,
    /// `#rrggbb` or `#rrggbbaa`.
    pub color: String,
    /// Title-cased accessibility label (may be empty).
    pub description: String,
}

impl ColorEntry {
    pub fn new(
        title: impl Into<String>,
        color: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            color: color.into(),
            description: description.into(),
        }
    }
}

/// Serialized as a single-key object: `{"<title>": "<color>"}`.
impl Serialize for ColorEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.color)?;
        map.end()
    }
}

/// A palette after title resolution and color encoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformedPalette {
    pub name: String,
    /// Entries in source order, unresolvable colors removed.
    pub entries: Vec<ColorEntry>,
    /// Number of source entries dropped because their color was unresolvable.
    pub skipped: usize,
}

impl TransformedPalette {
    pub fn new(name: impl Into<String>, entries: Vec<ColorEntry>, skipped: usize) -> Self {
        Self {
            name: name.into(),
            entries,
            skipped,
        }
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.title.as_str())
    }
}

/// Serialized as `{"<name>": [ {title: color}, ... ]}`.
impl Serialize for TransformedPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.entries)?;
        map.end()
    }
}

/// Transformed palettes of one run, keyed by palette name.
#[derive(Debug, Clone, Default)]
pub struct PaletteSet {
    palettes: BTreeMap<String, TransformedPalette>,
}

impl PaletteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a palette under its own name.
    ///
    /// The first palette with a given name is kept; a later one is handed
    /// back as `Err` so the caller can report it.
    pub fn insert(&mut self, palette: TransformedPalette) -> Result<(), TransformedPalette> {
        match self.palettes.entry(palette.name.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(palette);
                Ok(())
            }
            Entry::Occupied(_) => Err(palette),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TransformedPalette> {
        self.palettes.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<TransformedPalette> {
        self.palettes.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.palettes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}

impl IntoIterator for PaletteSet {
    type Item = TransformedPalette;
    type IntoIter = std::collections::btree_map::IntoValues<String, TransformedPalette>;

    fn into_iter(self) -> Self::IntoIter {
        self.palettes.into_values()
    }
}

impl FromIterator<TransformedPalette> for PaletteSet {
    fn from_iter<I: IntoIterator<Item = TransformedPalette>>(iter: I) -> Self {
        let mut set = Self::new();
        for palette in iter {
            let _ = set.insert(palette);
        }
        set
    }
}
