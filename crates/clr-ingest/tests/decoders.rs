//! Tests for decoding palette files from disk.

use std::fs;
use std::path::{Path, PathBuf};

use clr_ingest::{DecoderRegistry, IngestError, list_palette_files};
use clr_model::RawColorSample;
use tempfile::TempDir;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn decodes_every_discovered_file() {
    let dir = TempDir::new().expect("create temp dir");
    write(
        dir.path(),
        "Neutrals.csv",
        "name,space,red,green,blue,white,alpha,label\n\
         #333,gray,,,,0.2,1,charcoal\n\
         Ink,rgb,0,0,0.2,,1,\n\
         Texture,pattern,,,,,,\n",
    );
    write(
        dir.path(),
        "brand.gpl",
        "GIMP Palette\nName: Brand\n255 0 0 Signal Red\n",
    );

    let registry = DecoderRegistry::default();
    let files = list_palette_files(dir.path(), &registry).expect("list palettes");
    let palettes: Vec<_> = files
        .iter()
        .map(|path| registry.decode_file(path).expect("decode"))
        .collect();

    assert_eq!(palettes[0].name, "brand");
    assert_eq!(palettes[1].name, "Neutrals");
    assert_eq!(palettes[1].len(), 3);
    assert_eq!(palettes[1].unresolvable_count(), 1);
    assert_eq!(
        palettes[1].entries[0].sample,
        Some(RawColorSample::gray(0.2, 1.0))
    );
    assert_eq!(palettes[1].entries[0].accessibility_label, "charcoal");
}

#[test]
fn utf8_bom_is_ignored() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write(dir.path(), "Bom.gpl", "\u{feff}GIMP Palette\n0 0 0 Black\n");

    let palette = DecoderRegistry::default()
        .decode_file(&path)
        .expect("decode");
    assert_eq!(palette.len(), 1);
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().expect("create temp dir");
    let err = DecoderRegistry::default()
        .decode_file(&dir.path().join("Gone.gpl"))
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn malformed_file_names_the_path() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write(dir.path(), "Broken.gpl", "JASC-PAL\n0100\n");

    let err = DecoderRegistry::default().decode_file(&path).unwrap_err();
    assert!(matches!(err, IngestError::Decode { .. }));
    assert!(err.to_string().contains("Broken.gpl"));
}
