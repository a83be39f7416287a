//! Palette transformation.
//!
//! This crate turns decoded palettes into the clr2json output document:
//!
//! - **color**: hex token encoding of color samples
//! - **title**: display-name resolution and per-palette de-duplication
//! - **palette**: the per-palette transform, in source order
//! - **document**: palette ordering and canonical JSON rendering

pub mod color;
pub mod document;
pub mod error;
pub mod palette;
pub mod title;

pub use color::{encode_alpha, encode_component, encode_sample};
pub use document::{assemble, assemble_single, render_json};
pub use error::{Result, TransformError};
pub use palette::{transform_palette, transform_palettes};
pub use title::{ResolvedTitle, TitleResolver, is_hex_color, title_case};
