//! CSV color lists.
//!
//! One color per row, columns located by header name:
//!
//! | column  | meaning                                              |
//! |---------|------------------------------------------------------|
//! | `name`  | color key (required)                                 |
//! | `space` | `rgb`/`srgb` or `gray`/`grey`/`white` (default `rgb`) |
//! | `red`, `green`, `blue` | RGB components in `[0, 1]`            |
//! | `white` | gray component in `[0, 1]`                           |
//! | `alpha` | opacity in `[0, 1]` (default `1`)                    |
//! | `label` | accessibility label (default empty)                  |
//!
//! Rows in any other color space, or with missing components, decode to an
//! entry without a sample.

use clr_model::{RawColorSample, RawPalette, RawPaletteEntry};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::decoder::PaletteDecoder;
use crate::error::DecodeError;

/// Decoder for `.csv` color lists.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvDecoder;

impl PaletteDecoder for CsvDecoder {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn description(&self) -> &'static str {
        "CSV color list"
    }

    fn decode(&self, name: &str, contents: &str) -> Result<RawPalette, DecodeError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(contents.as_bytes());
        let columns = Columns::locate(reader.headers()?)?;

        let mut palette = RawPalette::new(name, Vec::new());
        for record in reader.records() {
            let record = record?;
            let entry = columns.entry(&record);
            if entry.sample.is_none() {
                debug!(palette = name, key = %entry.key, "color could not be resolved");
            }
            palette.push(entry);
        }
        Ok(palette)
    }
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    space: Option<usize>,
    red: Option<usize>,
    green: Option<usize>,
    blue: Option<usize>,
    white: Option<usize>,
    alpha: Option<usize>,
    label: Option<usize>,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, DecodeError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h.trim_matches('\u{feff}').eq_ignore_ascii_case(column))
        };
        Ok(Self {
            name: find("name").ok_or(DecodeError::MissingColumn { column: "name" })?,
            space: find("space"),
            red: find("red"),
            green: find("green"),
            blue: find("blue"),
            white: find("white"),
            alpha: find("alpha"),
            label: find("label"),
        })
    }

    fn entry(&self, record: &StringRecord) -> RawPaletteEntry {
        let key = record.get(self.name).unwrap_or_default();
        let label = field(record, self.label).unwrap_or_default();
        RawPaletteEntry::new(key, self.sample(record)).with_label(label)
    }

    fn sample(&self, record: &StringRecord) -> Option<RawColorSample> {
        let alpha = match field(record, self.alpha) {
            Some(value) => value.parse::<f64>().ok()?,
            None => 1.0,
        };
        let component = |index: Option<usize>| field(record, index)?.parse::<f64>().ok();

        let space = field(record, self.space).unwrap_or("rgb").to_ascii_lowercase();
        let sample = match space.as_str() {
            "rgb" | "srgb" => RawColorSample::rgba(
                component(self.red)?,
                component(self.green)?,
                component(self.blue)?,
                alpha,
            ),
            "gray" | "grey" | "white" => RawColorSample::gray(component(self.white)?, alpha),
            _ => return None,
        };
        sample.clamped()
    }
}

/// Non-empty field at `index`.
fn field(record: &StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| record.get(i))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(contents: &str) -> RawPalette {
        CsvDecoder.decode("Test", contents).unwrap()
    }

    #[test]
    fn test_rgb_rows() {
        let palette = decode("name,red,green,blue,alpha\nRed,1,0,0,1\nGlass,0,0.5,1,0.25\n");
        assert_eq!(palette.name, "Test");
        assert_eq!(palette.len(), 2);
        assert_eq!(
            palette.entries[1].sample,
            Some(RawColorSample::rgba(0.0, 0.5, 1.0, 0.25))
        );
    }

    #[test]
    fn test_alpha_defaults_to_opaque() {
        let palette = decode("name,red,green,blue\nRed,1,0,0\n");
        assert_eq!(palette.entries[0].sample.map(|s| s.alpha()), Some(1.0));
    }

    #[test]
    fn test_gray_rows() {
        let palette = decode("name,space,white,alpha\nAsh,gray,0.2,\nFog,Grey,0.9,0.5\n");
        assert_eq!(palette.entries[0].sample, Some(RawColorSample::gray(0.2, 1.0)));
        assert_eq!(palette.entries[1].sample, Some(RawColorSample::gray(0.9, 0.5)));
    }

    #[test]
    fn test_unresolvable_rows_are_kept() {
        let palette = decode(
            "name,space,red,green,blue,white\nStripes,pattern,,,,\nHalf,rgb,1,,0,\nOops,rgb,x,0,0,\n",
        );
        assert_eq!(palette.len(), 3);
        assert_eq!(palette.unresolvable_count(), 3);
    }

    #[test]
    fn test_components_are_clamped() {
        let palette = decode("name,red,green,blue,alpha\nHot,1.2,-0.1,0.5,3\n");
        assert_eq!(
            palette.entries[0].sample,
            Some(RawColorSample::rgba(1.0, 0.0, 0.5, 1.0))
        );
    }

    #[test]
    fn test_labels_and_header_case() {
        let palette = decode("\u{feff}Name,RED,Green,blue,Label\n#ff0000,1,0,0,bright red\n");
        assert_eq!(palette.entries[0].key, "#ff0000");
        assert_eq!(palette.entries[0].accessibility_label, "bright red");
    }

    #[test]
    fn test_quoted_fields() {
        let palette = decode("name,red,green,blue,label\n\"Red, Warm\",1,0.2,0,\"warm, red\"\n");
        assert_eq!(palette.entries[0].key, "Red, Warm");
        assert_eq!(palette.entries[0].accessibility_label, "warm, red");
    }

    #[test]
    fn test_missing_name_column() {
        let err = CsvDecoder.decode("Test", "red,green,blue\n1,0,0\n").unwrap_err();
        assert!(matches!(err, DecodeError::MissingColumn { column: "name" }));
    }
}
