mod hsi;

use smart_leds::RGB8;

pub use hsi::{Hsi, clamp_ratio, hsi2rgb, normalize_hue};

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
