//! Conversion pipeline with explicit stages.
//!
//! 1. **Ingest**: Locate palette sources and decode them into raw palettes
//! 2. **Transform**: Encode colors and resolve titles per palette
//! 3. **Assemble**: Order palettes into the output document
//! 4. **Output**: Render canonical JSON and write it to the destination
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clr_ingest::{DecoderRegistry, IngestError, list_palette_files, palette_name};
use clr_model::{Document, RawPalette};
use clr_transform::{assemble, assemble_single, render_json, transform_palettes};
use tracing::{debug, info, warn};

use crate::config::{COLORS_DIR_ENV_VAR, OutputTarget};

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Result of the ingest stage.
#[derive(Debug, Default)]
pub struct IngestResult {
    /// Decoded palettes in case-insensitive file name order.
    pub palettes: Vec<RawPalette>,
    /// Problems that caused a source to be skipped.
    pub errors: Vec<String>,
}

/// Decodes every palette source in `dir`.
///
/// Never fails: an unreadable directory, an empty directory, or a file
/// that does not decode is recorded in [`IngestResult::errors`] and
/// logged, and the remaining sources are still decoded.
pub fn ingest_directory(dir: &Path, registry: &DecoderRegistry) -> IngestResult {
    let mut result = IngestResult::default();

    let files = match list_palette_files(dir, registry) {
        Ok(files) => files,
        Err(error) => {
            warn!(%error, "cannot read palette directory");
            result.errors.push(error.to_string());
            return result;
        }
    };

    if files.is_empty() {
        warn!(dir = %dir.display(), "no palette files found");
    }

    for path in files {
        match registry.decode_file(&path) {
            Ok(palette) => {
                debug!(
                    path = %path.display(),
                    palette = %palette.name,
                    entries = palette.len(),
                    "decoded palette"
                );
                result.palettes.push(palette);
            }
            Err(error) => {
                warn!(%error, "skipping palette file");
                result.errors.push(error.to_string());
            }
        }
    }

    info!(
        decoded = result.palettes.len(),
        skipped = result.errors.len(),
        "ingest complete"
    );
    result
}

/// Decodes a single palette source.
///
/// # Errors
///
/// Fails if the file does not exist, has an unsupported extension, or
/// cannot be decoded.
pub fn ingest_file(path: &Path, registry: &DecoderRegistry) -> Result<RawPalette> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    let palette = registry.decode_file(path)?;
    debug!(palette = %palette.name, entries = palette.len(), "decoded palette");
    Ok(palette)
}

// ============================================================================
// Stage 2-3: Transform and Assemble
// ============================================================================

/// A document ready for output plus the problems met on the way.
#[derive(Debug, Default)]
pub struct Conversion {
    pub document: Document,
    /// Sources that were skipped, one message each.
    pub warnings: Vec<String>,
}

/// Converts every palette source in `dir` into one document.
pub fn convert_directory(dir: &Path, registry: &DecoderRegistry) -> Conversion {
    let IngestResult {
        palettes,
        mut errors,
    } = ingest_directory(dir, registry);

    let (set, duplicates) = transform_palettes(&palettes);
    for name in duplicates {
        warn!(palette = %name, "duplicate palette name, keeping the first source");
        errors.push(format!("duplicate palette '{name}' skipped"));
    }

    Conversion {
        document: assemble(set),
        warnings: errors,
    }
}

/// Converts the batch source directory, or yields an empty document when
/// no directory could be located.
pub fn convert_colors_dir(dir: Option<&Path>, registry: &DecoderRegistry) -> Conversion {
    match dir {
        Some(dir) => convert_directory(dir, registry),
        None => {
            warn!("cannot determine the colors directory");
            Conversion {
                document: Document::default(),
                warnings: vec![format!(
                    "no colors directory found; pass --colors-dir or set {COLORS_DIR_ENV_VAR}"
                )],
            }
        }
    }
}

/// Converts the palette source at `path` into a single-palette document.
///
/// # Errors
///
/// Fails if the source cannot be ingested or its palette is missing from
/// the decoded set.
pub fn convert_file(path: &Path, registry: &DecoderRegistry) -> Result<Conversion> {
    let palette = ingest_file(path, registry)?;
    let name = palette_name(path);
    let (set, _) = transform_palettes([&palette]);
    // The decoder names the palette after the same stem, so this lookup only
    // fails if a decoder breaks that contract.
    let document = assemble_single(set, &name)
        .with_context(|| format!("extract palette from {}", path.display()))?;
    Ok(Conversion {
        document,
        warnings: Vec::new(),
    })
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Renders `document` and writes it, with a trailing newline, to `target`.
///
/// # Errors
///
/// Fails if rendering or writing fails; nothing is written in the first case.
pub fn write_document(document: &Document, target: &OutputTarget) -> Result<()> {
    let json = render_json(document).context("render JSON")?;
    let contents = format!("{json}\n");
    match target {
        OutputTarget::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .and_then(|()| stdout.flush())
                .context("write to stdout")?;
        }
        OutputTarget::File(path) => {
            std::fs::write(path, contents)
                .with_context(|| format!("write {}", path.display()))?;
        }
    }
    info!(output = %target, palettes = document.palettes.len(), "document written");
    Ok(())
}
