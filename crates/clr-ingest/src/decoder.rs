//! Decoder trait and extension-based registry.
//!
//! A [`PaletteDecoder`] turns the contents of one palette file into a
//! [`RawPalette`]. The [`DecoderRegistry`] picks the decoder for a path by
//! its extension (case-insensitive).

use std::collections::BTreeMap;
use std::path::Path;

use clr_model::RawPalette;
use tracing::debug;

use crate::csv_list::CsvDecoder;
use crate::error::{DecodeError, IngestError, Result};
use crate::gpl::GplDecoder;

/// Trait for palette file formats.
pub trait PaletteDecoder: Send + Sync {
    /// File extension handled by this decoder, lowercase and without a dot.
    fn extension(&self) -> &'static str;

    /// Returns a human-readable description of the format.
    fn description(&self) -> &'static str {
        "Palette file"
    }

    /// Decodes file contents into a palette called `name`.
    ///
    /// Entries must keep their order of appearance. Colors that cannot be
    /// resolved are kept with `sample: None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not valid for this format.
    fn decode(&self, name: &str, contents: &str) -> std::result::Result<RawPalette, DecodeError>;

    /// Reads and decodes the file at `path`, naming the palette after the
    /// file stem.
    fn decode_file(&self, path: &Path) -> Result<RawPalette> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                IngestError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                IngestError::FileRead {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        let contents = contents.strip_prefix('\u{feff}').unwrap_or(&contents);

        self.decode(&palette_name(path), contents)
            .map_err(|source| IngestError::Decode {
                path: path.to_path_buf(),
                source,
            })
    }
}

/// Palette name for a source file: the file name without its extension,
/// case preserved.
pub fn palette_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Registry of decoders indexed by file extension.
pub struct DecoderRegistry {
    decoders: BTreeMap<&'static str, Box<dyn PaletteDecoder>>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: BTreeMap::new(),
        }
    }

    /// Registers a decoder for its extension, replacing any previous one.
    pub fn register(&mut self, decoder: Box<dyn PaletteDecoder>) {
        self.decoders.insert(decoder.extension(), decoder);
    }

    /// Gets the decoder for an extension.
    pub fn get(&self, extension: &str) -> Option<&dyn PaletteDecoder> {
        let extension = extension.to_ascii_lowercase();
        self.decoders
            .get(extension.as_str())
            .map(|decoder| decoder.as_ref())
    }

    /// Gets the decoder responsible for `path`.
    pub fn for_path(&self, path: &Path) -> Option<&dyn PaletteDecoder> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get(ext))
    }

    /// Returns true if some decoder handles `path`.
    pub fn is_supported(&self, path: &Path) -> bool {
        self.for_path(path).is_some()
    }

    /// Registered extensions in sorted order.
    pub fn supported_extensions(&self) -> Vec<&'static str> {
        self.decoders.keys().copied().collect()
    }

    /// Registered `(extension, description)` pairs in sorted order.
    pub fn formats(&self) -> Vec<(&'static str, &'static str)> {
        self.decoders
            .values()
            .map(|decoder| (decoder.extension(), decoder.description()))
            .collect()
    }

    /// Decodes `path` with the decoder registered for its extension.
    pub fn decode_file(&self, path: &Path) -> Result<RawPalette> {
        let decoder = self
            .for_path(path)
            .ok_or_else(|| IngestError::UnsupportedExtension {
                path: path.to_path_buf(),
                supported: self
                    .supported_extensions()
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        debug!(path = %path.display(), format = decoder.extension(), "decoding palette");
        decoder.decode_file(path)
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CsvDecoder));
        registry.register(Box::new(GplDecoder));
        registry
    }
}
