//! Run configuration resolved from flags and the environment.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

/// Environment variable overriding the batch-mode source directory.
pub const COLORS_DIR_ENV_VAR: &str = "CLR2JSON_COLORS_DIR";

/// Batch-mode output file, relative to the working directory.
pub const DEFAULT_BATCH_OUTPUT: &str = "palettes.json";

/// Output path that selects standard output.
pub const STDOUT_PATH: &str = "-";

/// Get the default batch-mode source directory.
///
/// Checks the `CLR2JSON_COLORS_DIR` environment variable first,
/// then falls back to `~/Library/Colors`. Returns `None` when no home
/// directory can be determined.
pub fn default_colors_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(COLORS_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join("Library").join("Colors"))
}

/// Resolves the source directory, preferring an explicit flag value.
pub fn resolve_colors_dir(flag: Option<&Path>) -> Option<PathBuf> {
    flag.map(Path::to_path_buf).or_else(default_colors_dir)
}

/// Where a rendered document is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Maps `-` to standard output and anything else to a file.
    pub fn from_path(path: &Path) -> Self {
        if path == Path::new(STDOUT_PATH) {
            Self::Stdout
        } else {
            Self::File(path.to_path_buf())
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }
}

impl std::fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stdout => f.write_str("<stdout>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
