//! Palette file discovery.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::decoder::DecoderRegistry;
use crate::error::{IngestError, Result};

/// Lists the palette files in `dir` that some decoder in `registry` handles.
///
/// Returns files sorted by case-insensitive file name; names that differ
/// only in case keep a byte-wise order. Subdirectories are not searched.
pub fn list_palette_files(dir: &Path, registry: &DecoderRegistry) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let read_error = |source: std::io::Error| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if !path.is_file() {
            continue;
        }
        match registry.for_path(&path) {
            Some(decoder) => {
                trace!(path = %path.display(), format = decoder.extension(), "found palette file");
                files.push(path);
            }
            None => trace!(path = %path.display(), "ignoring file without a palette decoder"),
        }
    }

    files.sort_by_cached_key(|path| {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        (name.to_lowercase(), name)
    });

    Ok(files)
}
