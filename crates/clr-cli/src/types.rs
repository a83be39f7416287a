use clr_model::Document;

use clr_cli::config::OutputTarget;

#[derive(Debug)]
pub struct RunSummary {
    /// Directory or file the palettes were read from.
    pub source: String,
    pub output: OutputTarget,
    pub palettes: Vec<PaletteSummary>,
    pub warnings: Vec<String>,
}

#[derive(Debug)]
pub struct PaletteSummary {
    pub name: String,
    pub colors: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn new(
        source: String,
        output: OutputTarget,
        document: &Document,
        warnings: Vec<String>,
    ) -> Self {
        let palettes = document
            .palettes
            .iter()
            .map(|palette| PaletteSummary {
                name: palette.name.clone(),
                colors: palette.entries.len(),
                skipped: palette.skipped,
            })
            .collect();
        Self {
            source,
            output,
            palettes,
            warnings,
        }
    }
}
