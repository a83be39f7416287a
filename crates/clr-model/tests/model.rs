//! Tests for clr-model types.

use clr_model::{ColorEntry, Document, RawColorSample, RawPaletteEntry, TransformedPalette};

#[test]
fn entry_label_builder() {
    let entry = RawPaletteEntry::new("#ff0000", Some(RawColorSample::rgba(1.0, 0.0, 0.0, 1.0)))
        .with_label("bright red");
    assert_eq!(entry.key, "#ff0000");
    assert_eq!(entry.accessibility_label, "bright red");
}

#[test]
fn duplicate_titles_coexist_in_wire_shape() {
    let palette = TransformedPalette::new(
        "Dupes",
        vec![
            ColorEntry::new("Red", "#ff0000", ""),
            ColorEntry::new("Red", "#fe0000", ""),
        ],
        0,
    );
    let json = serde_json::to_string(&palette).expect("serialize palette");
    assert_eq!(json, r##"{"Dupes":[{"Red":"#ff0000"},{"Red":"#fe0000"}]}"##);
}

#[test]
fn description_is_not_serialized() {
    let entry = ColorEntry::new("Sky", "#87ceeb", "Sky Blue");
    let json = serde_json::to_string(&entry).expect("serialize entry");
    assert_eq!(json, r##"{"Sky":"#87ceeb"}"##);
}

#[test]
fn document_counts_entries() {
    let document = Document::new(vec![
        TransformedPalette::new("A", vec![ColorEntry::new("x", "#000000", "")], 1),
        TransformedPalette::new(
            "B",
            vec![
                ColorEntry::new("y", "#111111", ""),
                ColorEntry::new("z", "#222222", ""),
            ],
            0,
        ),
    ]);
    assert_eq!(document.entry_count(), 3);
    assert_eq!(document.palette_names().collect::<Vec<_>>(), vec!["A", "B"]);
}

#[test]
fn empty_document_serializes() {
    let json = serde_json::to_string(&Document::default()).expect("serialize document");
    assert_eq!(json, r#"{"palettes":[]}"#);
}
