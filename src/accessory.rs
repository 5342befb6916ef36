//! Lightbulb accessory description and characteristic table
//!
//! The table is built once at startup and routes protocol reads and
//! writes either to the static accessory information or to the shared
//! light state.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use heapless::Vec;

use crate::attribute::{AttributeError, AttributeKind, AttributeValue, Permissions, ValueFormat};
use crate::output::{LightOutput, OutputDriver};
use crate::shared::SharedLight;

/// Maximum number of characteristics in the table
pub const MAX_CHARACTERISTICS: usize = 10;

const INFORMATION: [AttributeKind; 6] = [
    AttributeKind::Name,
    AttributeKind::Manufacturer,
    AttributeKind::SerialNumber,
    AttributeKind::Model,
    AttributeKind::FirmwareRevision,
    AttributeKind::Identify,
];

const LIGHTBULB: [AttributeKind; 4] = [
    AttributeKind::On,
    AttributeKind::Brightness,
    AttributeKind::Hue,
    AttributeKind::Saturation,
];

/// Accessory category announced to controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Lightbulb,
}

impl Category {
    /// Category identifier used by the protocol
    pub const fn id(self) -> u8 {
        match self {
            Category::Lightbulb => 5,
        }
    }
}

/// Static accessory metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryInfo<'a> {
    pub name: &'a str,
    pub manufacturer: &'a str,
    pub serial_number: &'a str,
    pub model: &'a str,
    pub firmware_revision: &'a str,
    /// Name of the lightbulb service
    pub service_name: &'a str,
    pub category: Category,
    /// Pairing secret
    pub setup_code: &'a str,
    pub setup_id: &'a str,
}

impl<'a> AccessoryInfo<'a> {
    /// Metadata string behind an information characteristic
    pub const fn value(&self, kind: AttributeKind) -> Option<&'a str> {
        match kind {
            AttributeKind::Name => Some(self.name),
            AttributeKind::Manufacturer => Some(self.manufacturer),
            AttributeKind::SerialNumber => Some(self.serial_number),
            AttributeKind::Model => Some(self.model),
            AttributeKind::FirmwareRevision => Some(self.firmware_revision),
            _ => None,
        }
    }
}

/// Characteristic descriptor registered with the protocol layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Characteristic {
    pub kind: AttributeKind,
    pub format: ValueFormat,
    pub permissions: Permissions,
}

impl Characteristic {
    pub const fn new(kind: AttributeKind) -> Self {
        Self {
            kind,
            format: kind.format(),
            permissions: kind.permissions(),
        }
    }
}

/// Accessory adapter between the protocol layer and the light
pub struct Accessory<'a, D: OutputDriver> {
    info: &'a AccessoryInfo<'a>,
    light: &'a SharedLight<D>,
    characteristics: Vec<Characteristic, MAX_CHARACTERISTICS>,
}

impl<'a, D: OutputDriver> Accessory<'a, D> {
    /// Build the characteristic table for a single lightbulb
    pub fn new(info: &'a AccessoryInfo<'a>, light: &'a SharedLight<D>) -> Result<Self, AttributeError> {
        let mut characteristics = Vec::new();
        for kind in INFORMATION.into_iter().chain(LIGHTBULB) {
            characteristics
                .push(Characteristic::new(kind))
                .map_err(|_| AttributeError::TableFull)?;
        }
        Ok(Self {
            info,
            light,
            characteristics,
        })
    }

    pub const fn info(&self) -> &AccessoryInfo<'a> {
        self.info
    }

    /// Registered characteristics, information service first
    pub fn characteristics(&self) -> &[Characteristic] {
        &self.characteristics
    }

    fn lookup(&self, kind: AttributeKind) -> Result<Characteristic, AttributeError> {
        self.characteristics
            .iter()
            .find(|c| c.kind == kind)
            .copied()
            .ok_or(AttributeError::Unsupported(kind))
    }

    /// Handle a read from the protocol layer
    pub fn read(&self, kind: AttributeKind) -> Result<AttributeValue<'a>, AttributeError> {
        let characteristic = self.lookup(kind)?;
        if !characteristic.permissions.readable() {
            return Err(AttributeError::NotReadable(kind));
        }
        match self.info.value(kind) {
            Some(value) => Ok(AttributeValue::Str(value)),
            None => self.light.read(kind),
        }
    }

    /// Handle a write from the protocol layer
    ///
    /// Identify requests return `None`, light writes return the output
    /// they produced.
    pub fn write(
        &self,
        kind: AttributeKind,
        value: AttributeValue<'_>,
    ) -> Result<Option<LightOutput>, AttributeError> {
        let characteristic = self.lookup(kind)?;
        if !characteristic.permissions.writable() {
            return Err(AttributeError::NotWritable(kind));
        }
        if kind == AttributeKind::Identify {
            kind.check(&value)?;
            self.identify();
            return Ok(None);
        }
        self.light.write(kind, value).map(Some)
    }

    /// Identify request from a controller
    pub fn identify(&self) {
        #[cfg(feature = "esp32-log")]
        println!("[Accessory.identify] accessory identify: {}", self.info.name);
    }
}
