#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::attribute::{AttributeError, AttributeKind, AttributeValue, Attributes};
use crate::color::hsi2rgb;
use crate::config::POWER_ON_BRIGHTNESS_FLOOR;
use crate::output::{ActiveLowOutput, LightOutput, OutputDriver};

/// Current lighting state of the strip
///
/// Values are stored as written. Hue is normalized and saturation and
/// brightness are clamped only when a color is computed.
#[derive(Debug)]
pub struct LightState<D: OutputDriver> {
    power: bool,
    hue: f32,
    saturation: f32,
    brightness: f32,

    output: ActiveLowOutput<D>,
}

impl<D: OutputDriver> LightState<D> {
    /// Create a powered-off state with all values at zero
    pub const fn new(driver: D) -> Self {
        Self {
            power: false,
            hue: 0.0,
            saturation: 0.0,
            brightness: 0.0,
            output: ActiveLowOutput::new(driver),
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    /// Brightness in percent
    pub const fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Hue in degrees
    pub const fn hue(&self) -> f32 {
        self.hue
    }

    /// Saturation in percent
    pub const fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Switch the light on or off
    ///
    /// Turning on with brightness below the floor keeps the strip dark
    /// without computing a color; the power flag still reads as on.
    pub fn set_power(&mut self, power: bool) -> LightOutput {
        self.power = power;
        if power && self.brightness < POWER_ON_BRIGHTNESS_FLOOR {
            return self.output.off();
        }
        self.update()
    }

    pub fn set_brightness(&mut self, brightness: f32) -> LightOutput {
        self.brightness = brightness;
        self.update()
    }

    pub fn set_hue(&mut self, hue: f32) -> LightOutput {
        self.hue = hue;
        self.update()
    }

    pub fn set_saturation(&mut self, saturation: f32) -> LightOutput {
        self.saturation = saturation;
        self.update()
    }

    /// Recompute and emit the output from the stored values
    pub fn update(&mut self) -> LightOutput {
        if !self.power {
            return self.output.off();
        }
        let color = hsi2rgb(self.hue, self.saturation, self.brightness);
        self.output.emit(color)
    }

    pub const fn driver(&self) -> &D {
        self.output.driver()
    }

    pub fn driver_mut(&mut self) -> &mut D {
        self.output.driver_mut()
    }
}

impl<D: OutputDriver> Attributes for LightState<D> {
    #[allow(clippy::cast_possible_truncation)]
    fn read(&self, kind: AttributeKind) -> Result<AttributeValue<'static>, AttributeError> {
        match kind {
            AttributeKind::On => Ok(AttributeValue::Bool(self.power)),
            AttributeKind::Brightness => Ok(AttributeValue::Int(self.brightness as i32)),
            AttributeKind::Hue => Ok(AttributeValue::Float(self.hue)),
            AttributeKind::Saturation => Ok(AttributeValue::Float(self.saturation)),
            other => Err(AttributeError::Unsupported(other)),
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn write(
        &mut self,
        kind: AttributeKind,
        value: AttributeValue<'_>,
    ) -> Result<LightOutput, AttributeError> {
        if let Err(err) = kind.check(&value) {
            #[cfg(feature = "esp32-log")]
            println!("[LightState.write] rejected: {}", err);
            return Err(err);
        }
        match (kind, value) {
            (AttributeKind::On, AttributeValue::Bool(power)) => Ok(self.set_power(power)),
            (AttributeKind::Brightness, AttributeValue::Int(brightness)) => {
                Ok(self.set_brightness(brightness as f32))
            }
            (AttributeKind::Hue, AttributeValue::Float(hue)) => Ok(self.set_hue(hue)),
            (AttributeKind::Saturation, AttributeValue::Float(saturation)) => {
                Ok(self.set_saturation(saturation))
            }
            (other, _) => Err(AttributeError::Unsupported(other)),
        }
    }
}
