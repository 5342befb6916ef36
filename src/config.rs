//! Compile-time accessory configuration
#![allow(clippy::unreadable_literal)]

use crate::accessory::{AccessoryInfo, Category};
use crate::output::Channel;

/// Scale of the HSI to RGB conversion (maximum channel value)
pub const LED_RGB_SCALE: f32 = 255.0;

/// Brightness (percent) below which powering on keeps the strip dark
pub const POWER_ON_BRIGHTNESS_FLOOR: f32 = 1.0;

/// GPIO numbers of the strip channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMapping {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl PinMapping {
    /// GPIO number driving `channel`
    pub const fn pin(self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }
}

pub const PINS: PinMapping = PinMapping {
    red: 14,
    green: 12,
    blue: 16,
};

pub const ACCESSORY: AccessoryInfo<'static> = AccessoryInfo {
    name: "ESP8266_LED",
    manufacturer: "西北偏北工作室",
    serial_number: "SN_0123456",
    model: "XBPB004",
    firmware_revision: "0.1.0",
    service_name: "灯带控制器",
    category: Category::Lightbulb,
    setup_code: "771-55-104",
    setup_id: "KD9K",
};
