//! Decoded color samples.

/// Color components as handed over by a palette decoder.
///
/// Every component is expected in `[0, 1]`. Decoders clamp before
/// constructing a sample; see [`RawColorSample::clamped`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawColorSample {
    /// A color that could be expressed in sRGB.
    Rgba {
        red: f64,
        green: f64,
        blue: f64,
        alpha: f64,
    },
    /// A single-channel color whose color space has no RGB conversion.
    Gray { white: f64, alpha: f64 },
}

impl RawColorSample {
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::Rgba {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn gray(white: f64, alpha: f64) -> Self {
        Self::Gray { white, alpha }
    }

    /// Alpha component regardless of channel layout.
    pub fn alpha(&self) -> f64 {
        match *self {
            Self::Rgba { alpha, .. } | Self::Gray { alpha, .. } => alpha,
        }
    }

    /// Returns a copy with every component clamped into `[0, 1]`.
    ///
    /// Returns `None` if any component is NaN.
    #[must_use]
    pub fn clamped(self) -> Option<Self> {
        fn unit(value: f64) -> Option<f64> {
            if value.is_nan() {
                None
            } else {
                Some(value.clamp(0.0, 1.0))
            }
        }

        match self {
            Self::Rgba {
                red,
                green,
                blue,
                alpha,
            } => Some(Self::rgba(unit(red)?, unit(green)?, unit(blue)?, unit(alpha)?)),
            Self::Gray { white, alpha } => Some(Self::gray(unit(white)?, unit(alpha)?)),
        }
    }
}
