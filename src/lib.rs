#![no_std]

pub mod accessory;
pub mod attribute;
pub mod color;
pub mod config;
pub mod output;
pub mod shared;
pub mod state;

pub use accessory::{Accessory, AccessoryInfo, Category, Characteristic};
pub use attribute::{AttributeError, AttributeKind, AttributeValue, Attributes, ValueFormat};
pub use color::{Hsi, Rgb, hsi2rgb};
pub use output::{ActiveLowOutput, Channel, Level, LightOutput, OutputDriver};
pub use shared::SharedLight;
pub use state::LightState;
