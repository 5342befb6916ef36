//! Active-low output stage
//!
//! The strip channels are wired active low: a logic-high pin or a full
//! duty cycle leaves the channel dark, duty 0 drives it at full power.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};

/// One color channel of the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Pick this channel's value out of a color
    pub const fn value(self, color: Rgb) -> u8 {
        match self {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }
}

/// Digital pin level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Abstract channel driver
///
/// Implement this trait to support different hardware platforms.
/// Both primitives are expected to succeed.
pub trait OutputDriver {
    /// Drive the channel pin to a digital level
    fn set_digital(&mut self, channel: Channel, level: Level);

    /// Drive the channel with a PWM duty value (0-255)
    fn set_analog(&mut self, channel: Channel, duty: u8);
}

/// What the output stage emitted on the last update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightOutput {
    /// Every channel switched off, no color computed
    Dark,
    /// Computed color written channel by channel
    Color(Rgb),
}

impl LightOutput {
    /// Color physically emitted
    pub const fn rgb(self) -> Rgb {
        match self {
            LightOutput::Dark => BLACK,
            LightOutput::Color(color) => color,
        }
    }
}

/// Duty cycle for an active-low channel
pub const fn duty_for(value: u8) -> u8 {
    255 - value
}

/// Output adapter translating colors into active-low driver calls
#[derive(Debug)]
pub struct ActiveLowOutput<D: OutputDriver> {
    driver: D,
}

impl<D: OutputDriver> ActiveLowOutput<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Switch every channel off
    pub fn off(&mut self) -> LightOutput {
        #[cfg(feature = "esp32-log")]
        println!("[ActiveLowOutput.off] OFF");
        for channel in Channel::ALL {
            self.driver.set_digital(channel, Level::High);
        }
        LightOutput::Dark
    }

    /// Write a color
    ///
    /// Zero channels are switched off digitally, the rest get an inverted
    /// PWM duty.
    pub fn emit(&mut self, color: Rgb) -> LightOutput {
        for channel in Channel::ALL {
            match channel.value(color) {
                0 => self.driver.set_digital(channel, Level::High),
                value => self.driver.set_analog(channel, duty_for(value)),
            }
        }
        LightOutput::Color(color)
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
