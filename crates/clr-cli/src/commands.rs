use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{info, info_span};

use clr_cli::config::{OutputTarget, resolve_colors_dir};
use clr_cli::pipeline::{convert_colors_dir, convert_file, write_document};
use clr_ingest::DecoderRegistry;

use crate::summary::apply_table_style;
use crate::types::RunSummary;

pub fn run_list_formats() -> Result<()> {
    let registry = DecoderRegistry::default();
    let mut table = Table::new();
    table.set_header(vec!["Extension", "Description"]);
    apply_table_style(&mut table);
    for (extension, description) in registry.formats() {
        table.add_row(vec![format!(".{extension}"), description.to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_batch(colors_dir: Option<&Path>, output: &Path) -> Result<RunSummary> {
    let dir = resolve_colors_dir(colors_dir);
    let source = dir.as_deref().map_or_else(
        || "<unknown colors directory>".to_string(),
        |dir| dir.display().to_string(),
    );
    let target = OutputTarget::from_path(output);
    let span = info_span!("batch", dir = %source, output = %target);
    let _guard = span.enter();
    let start = Instant::now();

    let registry = DecoderRegistry::default();
    let conversion = convert_colors_dir(dir.as_deref(), &registry);
    write_document(&conversion.document, &target)?;

    info!(
        palettes = conversion.document.palettes.len(),
        warnings = conversion.warnings.len(),
        duration_ms = start.elapsed().as_millis(),
        "batch conversion complete"
    );
    Ok(RunSummary::new(
        source,
        target,
        &conversion.document,
        conversion.warnings,
    ))
}

pub fn run_single(input: &Path, output: &Path) -> Result<RunSummary> {
    let target = OutputTarget::from_path(output);
    let span = info_span!("single", input = %input.display(), output = %target);
    let _guard = span.enter();
    let start = Instant::now();

    let registry = DecoderRegistry::default();
    let conversion = convert_file(input, &registry)?;
    write_document(&conversion.document, &target)?;

    info!(
        colors = conversion.document.entry_count(),
        duration_ms = start.elapsed().as_millis(),
        "single conversion complete"
    );
    Ok(RunSummary::new(
        input.display().to_string(),
        target,
        &conversion.document,
        conversion.warnings,
    ))
}
