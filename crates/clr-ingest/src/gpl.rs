//! GIMP palettes (`.gpl`).
//!
//! ```text
//! GIMP Palette
//! Name: Brand
//! Columns: 4
//! # comment
//! 255   0   0	Signal Red
//!  18  52  86	Navy
//! ```
//!
//! Components are integers in `0..=255`; GIMP palettes carry no alpha.

use clr_model::{RawColorSample, RawPalette, RawPaletteEntry};

use crate::decoder::PaletteDecoder;
use crate::error::DecodeError;

const MAGIC: &str = "GIMP Palette";
const UNTITLED: &str = "Untitled";

/// Decoder for `.gpl` palettes.
#[derive(Debug, Clone, Copy, Default)]
pub struct GplDecoder;

impl PaletteDecoder for GplDecoder {
    fn extension(&self) -> &'static str {
        "gpl"
    }

    fn description(&self) -> &'static str {
        "GIMP palette"
    }

    fn decode(&self, name: &str, contents: &str) -> Result<RawPalette, DecodeError> {
        let mut lines = contents
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        match lines.next() {
            Some((_, MAGIC)) => {}
            _ => return Err(DecodeError::MissingHeader { expected: MAGIC }),
        }

        let mut palette = RawPalette::new(name, Vec::new());
        for (number, line) in lines {
            if line.starts_with('#') || is_header(line) {
                continue;
            }
            palette.push(parse_color_line(number, line)?);
        }
        Ok(palette)
    }
}

fn is_header(line: &str) -> bool {
    ["Name:", "Columns:"]
        .iter()
        .any(|prefix| line.starts_with(prefix))
}

fn parse_color_line(number: usize, line: &str) -> Result<RawPaletteEntry, DecodeError> {
    let mut rest = line;
    let mut components = [0.0f64; 3];
    for component in &mut components {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let token = &rest[..end];
        if token.is_empty() {
            return Err(DecodeError::InvalidLine {
                line: number,
                reason: "expected three color components".to_string(),
            });
        }
        let value: u8 = token.parse().map_err(|_| DecodeError::InvalidLine {
            line: number,
            reason: format!("invalid color component '{token}'"),
        })?;
        *component = f64::from(value) / 255.0;
        rest = rest[end..].trim_start();
    }

    let key = if rest.is_empty() { UNTITLED } else { rest };
    let [red, green, blue] = components;
    Ok(RawPaletteEntry::new(
        key,
        Some(RawColorSample::rgba(red, green, blue, 1.0)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRAND: &str = "GIMP Palette\nName: Brand\nColumns: 2\n#\n255   0   0\tSignal Red\n 18  52  86\tNavy Blue\n  0   0   0\n";

    #[test]
    fn test_decode_colors_in_order() {
        let palette = GplDecoder.decode("Brand", BRAND).unwrap();
        let keys: Vec<&str> = palette.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["Signal Red", "Navy Blue", "Untitled"]);
        assert_eq!(
            palette.entries[0].sample,
            Some(RawColorSample::rgba(1.0, 0.0, 0.0, 1.0))
        );
    }

    #[test]
    fn test_leading_blank_lines_allowed() {
        let palette = GplDecoder.decode("Brand", "\n\nGIMP Palette\n1 2 3 x\n").unwrap();
        assert_eq!(palette.len(), 1);
    }

    #[test]
    fn test_missing_magic() {
        let err = GplDecoder.decode("Brand", "Name: Brand\n0 0 0 Black\n").unwrap_err();
        assert!(matches!(err, DecodeError::MissingHeader { .. }));
    }

    #[test]
    fn test_out_of_range_component() {
        let err = GplDecoder
            .decode("Brand", "GIMP Palette\n0 0 0 Black\n256 0 0 Too Red\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 3: invalid color component '256'"
        );
    }

    #[test]
    fn test_short_line() {
        let err = GplDecoder.decode("Brand", "GIMP Palette\n12 34\n").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidLine { line: 2, .. }));
    }
}
