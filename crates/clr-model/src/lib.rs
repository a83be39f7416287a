//! Palette data model shared by the clr2json crates.
//!
//! - **sample**: decoded color components ([`RawColorSample`])
//! - **raw**: palettes as produced by a decoder ([`RawPalette`])
//! - **palette**: transformed palettes and their entries ([`TransformedPalette`])
//! - **document**: the final JSON document ([`Document`])

pub mod document;
pub mod palette;
pub mod raw;
pub mod sample;

pub use document::Document;
pub use palette::{ColorEntry, PaletteSet, TransformedPalette};
pub use raw::{RawPalette, RawPaletteEntry};
pub use sample::RawColorSample;
