//! HSI to RGB conversion
//!
//! Hue is given in degrees, saturation and intensity in percent. The hue
//! circle is split into three 120° sectors; inside each sector the classic
//! trigonometric HSI formula produces a primary, a secondary and an unused
//! channel, which rotate between red, green and blue.

use crate::color::Rgb;
use crate::config::LED_RGB_SCALE;

/// Degrees to radians, as used by the firmware (`3.14159 / 180`)
#[allow(clippy::approx_constant)]
const DEG_TO_RAD: f32 = 3.141_59 / 180.0;

/// Start of the green/blue sector (120°)
const SECTOR_GREEN: f32 = 2.094_39;

/// Start of the blue/red sector (240°)
const SECTOR_BLUE: f32 = 4.188_787;

/// Reference angle of the formula denominator (60°)
#[allow(clippy::approx_constant)]
const REFERENCE_ANGLE: f32 = 1.047_196_667;

/// Color in the hue/saturation/intensity model
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Hsi {
    /// Hue in degrees, any finite value
    pub hue: f32,
    /// Saturation in percent
    pub saturation: f32,
    /// Intensity in percent
    pub intensity: f32,
}

impl Hsi {
    pub const fn new(hue: f32, saturation: f32, intensity: f32) -> Self {
        Self {
            hue,
            saturation,
            intensity,
        }
    }

    /// Convert to linear 0-255 channel values
    pub fn to_rgb(self) -> Rgb {
        hsi2rgb(self.hue, self.saturation, self.intensity)
    }
}

/// Cycle a hue in degrees around to `[0, 360)`
///
/// Non-finite input has no meaningful angle and maps to 0.
pub fn normalize_hue(hue: f32) -> f32 {
    if !hue.is_finite() {
        return 0.0;
    }
    // Fold far out of range values first, the loops then step at most once
    let mut hue = if libm::fabsf(hue) >= 360.0 * 4.0 {
        hue % 360.0
    } else {
        hue
    };
    while hue < 0.0 {
        hue += 360.0;
    }
    while hue >= 360.0 {
        hue -= 360.0;
    }
    hue
}

/// Clamp a ratio to `[0, 1]`; NaN becomes 0
pub fn clamp_ratio(ratio: f32) -> f32 {
    if ratio > 0.0 {
        if ratio < 1.0 { ratio } else { 1.0 }
    } else {
        0.0
    }
}

/// Convert HSI (degrees, percent, percent) into RGB channel values
///
/// Saturation and intensity outside `[0, 100]` are clamped, hue is
/// normalized. Intensity is shaped as `i * sqrt(i)` for finer steps near
/// black.
pub fn hsi2rgb(hue: f32, saturation: f32, intensity: f32) -> Rgb {
    let h = normalize_hue(hue) * DEG_TO_RAD;
    let s = clamp_ratio(saturation / 100.0);
    let i = clamp_ratio(intensity / 100.0);
    let i = i * libm::sqrtf(i);

    let base = LED_RGB_SCALE * i / 3.0;

    if h < SECTOR_GREEN {
        let (primary, secondary, unused) = sector(h, s, base);
        Rgb {
            r: primary,
            g: secondary,
            b: unused,
        }
    } else if h < SECTOR_BLUE {
        let (primary, secondary, unused) = sector(h - SECTOR_GREEN, s, base);
        Rgb {
            r: unused,
            g: primary,
            b: secondary,
        }
    } else {
        let (primary, secondary, unused) = sector(h - SECTOR_BLUE, s, base);
        Rgb {
            r: secondary,
            g: unused,
            b: primary,
        }
    }
}

/// Channel values for a sector-local hue `h` (radians)
fn sector(h: f32, s: f32, base: f32) -> (u8, u8, u8) {
    let ratio = libm::cosf(h) / libm::cosf(REFERENCE_ANGLE - h);
    (
        to_channel(base * (1.0 + s * ratio)),
        to_channel(base * (1.0 + s * (1.0 - ratio))),
        to_channel(base * (1.0 - s)),
    )
}

/// Truncate to a channel value
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
