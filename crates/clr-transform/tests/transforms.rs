//! End-to-end tests for palette transformation and document rendering.

use clr_model::{RawColorSample, RawPalette, RawPaletteEntry};
use clr_transform::{assemble, render_json, transform_palette, transform_palettes};

fn sunset() -> RawPalette {
    RawPalette::new(
        "Sunset",
        vec![
            RawPaletteEntry::new("FF0000", Some(RawColorSample::rgba(1.0, 0.0, 0.0, 1.0))),
            RawPaletteEntry::new("#00ff00", Some(RawColorSample::rgba(0.0, 1.0, 0.0, 0.5))),
        ],
    )
}

#[test]
fn test_sunset_palette_entries() {
    let palette = transform_palette(&sunset());

    assert_eq!(palette.name, "Sunset");
    let pairs: Vec<(&str, &str)> = palette
        .entries
        .iter()
        .map(|e| (e.title.as_str(), e.color.as_str()))
        .collect();
    // Hex keys stay as-is when there is no accessibility label.
    assert_eq!(
        pairs,
        vec![("FF0000", "#ff0000"), ("#00ff00", "#00ff0080")]
    );
}

#[test]
fn test_sunset_document_compact() {
    let (set, _) = transform_palettes([&sunset()]);
    let document = assemble(set);
    let json = serde_json::to_string(&document).unwrap();
    assert_eq!(
        json,
        r##"{"palettes":[{"Sunset":[{"FF0000":"#ff0000"},{"#00ff00":"#00ff0080"}]}]}"##
    );
}

#[test]
fn test_sunset_document_pretty() {
    let (set, _) = transform_palettes([&sunset()]);
    let json = render_json(&assemble(set)).unwrap();
    insta::assert_snapshot!(json, @r##"
{
  "palettes": [
    {
      "Sunset": [
        {
          "FF0000": "#ff0000"
        },
        {
          "#00ff00": "#00ff0080"
        }
      ]
    }
  ]
}
"##);
}

#[test]
fn test_accessibility_labels_and_grayscale() {
    let raw = RawPalette::new(
        "Neutrals",
        vec![
            RawPaletteEntry::new("#333", Some(RawColorSample::gray(0.2, 1.0)))
                .with_label("DARK charcoal"),
            RawPaletteEntry::new("Paper", Some(RawColorSample::gray(1.0, 0.5))),
            RawPaletteEntry::new("Catalog Color", None),
            RawPaletteEntry::new("abc", Some(RawColorSample::rgba(0.0, 0.0, 0.0, 0.0)))
                .with_label("dark charcoal"),
        ],
    );
    let palette = transform_palette(&raw);

    let titles: Vec<&str> = palette.titles().collect();
    assert_eq!(titles, vec!["Dark Charcoal", "Paper", "Dark Charcoal 2"]);
    let colors: Vec<&str> = palette.entries.iter().map(|e| e.color.as_str()).collect();
    assert_eq!(colors, vec!["#333333", "#ffffff80", "#00000000"]);
    assert_eq!(palette.entries[1].description, "");
    assert_eq!(palette.skipped, 1);
}

#[test]
fn test_palette_order_ignores_input_order() {
    let names = ["midnight", "Aurora", "coral", "Blossom"];
    let raws: Vec<RawPalette> = names
        .iter()
        .map(|name| {
            RawPalette::new(
                *name,
                vec![RawPaletteEntry::new(
                    "White",
                    Some(RawColorSample::gray(1.0, 1.0)),
                )],
            )
        })
        .collect();

    let (forward, _) = transform_palettes(raws.iter());
    let (backward, _) = transform_palettes(raws.iter().rev());

    let forward = assemble(forward);
    let backward = assemble(backward);
    assert_eq!(
        forward.palette_names().collect::<Vec<_>>(),
        vec!["Aurora", "Blossom", "coral", "midnight"]
    );
    assert_eq!(
        render_json(&forward).unwrap(),
        render_json(&backward).unwrap()
    );
}
