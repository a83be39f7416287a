//! Palette source ingestion.
//!
//! This crate locates palette files and decodes them into
//! [`clr_model::RawPalette`] values for the transformer.
//!
//! # Features
//!
//! - **Discovery**: List palette files in a directory, in case-insensitive name order
//! - **Decoders**: [`PaletteDecoder`] implementations selected by file extension
//!   through a [`DecoderRegistry`]
//!   - CSV color lists (`.csv`)
//!   - GIMP palettes (`.gpl`)
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use clr_ingest::{DecoderRegistry, list_palette_files};
//!
//! let registry = DecoderRegistry::default();
//! for path in list_palette_files(Path::new("palettes"), &registry)? {
//!     let palette = registry.decode_file(&path)?;
//!     println!("{}: {} colors", palette.name, palette.len());
//! }
//! ```

mod csv_list;
mod decoder;
mod discovery;
mod error;
mod gpl;

// === Error Types ===
pub use error::{DecodeError, IngestError, Result};

// === Decoders ===
pub use csv_list::CsvDecoder;
pub use decoder::{DecoderRegistry, PaletteDecoder, palette_name};
pub use gpl::GplDecoder;

// === File Discovery ===
pub use discovery::list_palette_files;
