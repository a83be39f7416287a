//! Hex token encoding for color samples.

use clr_model::RawColorSample;

/// Encodes a component in `[0, 1]` as two lowercase hex digits.
///
/// The component is scaled to `0..=255` and rounded half away from zero,
/// so `0.5` becomes `80`.
pub fn encode_component(component: f64) -> String {
    let value = (component * 255.0).round() as u8;
    format!("{value:02x}")
}

/// Encodes an alpha component, returning an empty string when fully opaque.
pub fn encode_alpha(alpha: f64) -> String {
    let hex = encode_component(alpha);
    if hex == "ff" { String::new() } else { hex }
}

/// Builds the `#rrggbb` / `#rrggbbaa` token for a sample.
///
/// Single-channel samples repeat the gray value for all three channels.
pub fn encode_sample(sample: &RawColorSample) -> String {
    match *sample {
        RawColorSample::Rgba {
            red,
            green,
            blue,
            alpha,
        } => format!(
            "#{}{}{}{}",
            encode_component(red),
            encode_component(green),
            encode_component(blue),
            encode_alpha(alpha)
        ),
        RawColorSample::Gray { white, alpha } => {
            let gray = encode_component(white);
            format!("#{gray}{gray}{gray}{}", encode_alpha(alpha))
        }
    }
}
