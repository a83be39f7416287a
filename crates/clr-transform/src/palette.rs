//! Per-palette transformation.

use clr_model::{ColorEntry, PaletteSet, RawPalette, TransformedPalette};
use tracing::{debug, trace};

use crate::color::encode_sample;
use crate::title::TitleResolver;

/// Transforms one decoded palette, preserving entry order.
///
/// Entries without a resolvable color are dropped and counted in
/// [`TransformedPalette::skipped`]. Title de-duplication is scoped to this
/// call.
pub fn transform_palette(raw: &RawPalette) -> TransformedPalette {
    let span = tracing::debug_span!("palette", name = %raw.name, entries = raw.len());
    let _guard = span.enter();

    let mut resolver = TitleResolver::new();
    let mut entries = Vec::with_capacity(raw.len());
    let mut skipped = 0usize;

    for entry in &raw.entries {
        let Some(sample) = entry.sample.as_ref() else {
            debug!(key = %entry.key, "skipping entry without a resolvable color");
            skipped += 1;
            continue;
        };

        let color = encode_sample(sample);
        let resolved = resolver.resolve(&entry.key, &entry.accessibility_label);
        trace!(
            key = %entry.key,
            title = %resolved.title,
            color = %color,
            "resolved entry"
        );
        entries.push(ColorEntry {
            title: resolved.title,
            color,
            description: resolved.description,
        });
    }

    debug!(converted = entries.len(), skipped, "palette transformed");
    TransformedPalette {
        name: raw.name.clone(),
        entries,
        skipped,
    }
}

/// Transforms several palettes into a [`PaletteSet`].
///
/// When two palettes share a name the first one wins; the names of the
/// rejected palettes are returned alongside the set.
pub fn transform_palettes<'a, I>(raws: I) -> (PaletteSet, Vec<String>)
where
    I: IntoIterator<Item = &'a RawPalette>,
{
    let mut set = PaletteSet::new();
    let mut duplicates = Vec::new();
    for raw in raws {
        if let Err(rejected) = set.insert(transform_palette(raw)) {
            duplicates.push(rejected.name);
        }
    }
    (set, duplicates)
}
