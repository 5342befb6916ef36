//! Typed accessory attributes
//!
//! The protocol layer reads and writes attribute values tagged with their
//! format. Every attribute has one declared format; a write carrying any
//! other format is rejected without touching the light.

use core::fmt;

use crate::output::LightOutput;

/// Value format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    Bool,
    Int,
    Float,
    Str,
}

impl ValueFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ValueFormat::Bool => "bool",
            ValueFormat::Int => "int",
            ValueFormat::Float => "float",
            ValueFormat::Str => "string",
        }
    }
}

/// Attribute value tagged with its format
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue<'a> {
    Bool(bool),
    Int(i32),
    Float(f32),
    Str(&'a str),
}

impl AttributeValue<'_> {
    pub const fn format(&self) -> ValueFormat {
        match self {
            AttributeValue::Bool(_) => ValueFormat::Bool,
            AttributeValue::Int(_) => ValueFormat::Int,
            AttributeValue::Float(_) => ValueFormat::Float,
            AttributeValue::Str(_) => ValueFormat::Str,
        }
    }
}

/// Access permissions of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permissions {
    Read,
    Write,
    ReadWrite,
}

impl Permissions {
    pub const fn readable(self) -> bool {
        matches!(self, Permissions::Read | Permissions::ReadWrite)
    }

    pub const fn writable(self) -> bool {
        matches!(self, Permissions::Write | Permissions::ReadWrite)
    }
}

/// Known attributes of the lightbulb accessory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Name,
    Manufacturer,
    SerialNumber,
    Model,
    FirmwareRevision,
    Identify,
    On,
    Brightness,
    Hue,
    Saturation,
}

impl AttributeKind {
    /// Declared value format
    pub const fn format(self) -> ValueFormat {
        match self {
            AttributeKind::Name
            | AttributeKind::Manufacturer
            | AttributeKind::SerialNumber
            | AttributeKind::Model
            | AttributeKind::FirmwareRevision => ValueFormat::Str,
            AttributeKind::Identify | AttributeKind::On => ValueFormat::Bool,
            AttributeKind::Brightness => ValueFormat::Int,
            AttributeKind::Hue | AttributeKind::Saturation => ValueFormat::Float,
        }
    }

    pub const fn permissions(self) -> Permissions {
        match self {
            AttributeKind::Name
            | AttributeKind::Manufacturer
            | AttributeKind::SerialNumber
            | AttributeKind::Model
            | AttributeKind::FirmwareRevision => Permissions::Read,
            AttributeKind::Identify => Permissions::Write,
            AttributeKind::On
            | AttributeKind::Brightness
            | AttributeKind::Hue
            | AttributeKind::Saturation => Permissions::ReadWrite,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            AttributeKind::Name => "name",
            AttributeKind::Manufacturer => "manufacturer",
            AttributeKind::SerialNumber => "serial_number",
            AttributeKind::Model => "model",
            AttributeKind::FirmwareRevision => "firmware_revision",
            AttributeKind::Identify => "identify",
            AttributeKind::On => "on",
            AttributeKind::Brightness => "brightness",
            AttributeKind::Hue => "hue",
            AttributeKind::Saturation => "saturation",
        }
    }

    /// Check that `value` carries the declared format
    pub fn check(self, value: &AttributeValue<'_>) -> Result<(), AttributeError> {
        let expected = self.format();
        let found = value.format();
        if expected == found {
            Ok(())
        } else {
            Err(AttributeError::TypeMismatch {
                kind: self,
                expected,
                found,
            })
        }
    }
}

/// Error type for attribute access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeError {
    /// Write tagged with a format other than the declared one
    TypeMismatch {
        kind: AttributeKind,
        expected: ValueFormat,
        found: ValueFormat,
    },
    /// Attribute can not be read
    NotReadable(AttributeKind),
    /// Attribute can not be written
    NotWritable(AttributeKind),
    /// Attribute is not handled here
    Unsupported(AttributeKind),
    /// Characteristic table is full
    TableFull,
}

impl fmt::Display for AttributeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeError::TypeMismatch {
                kind,
                expected,
                found,
            } => write!(
                f,
                "Invalid {}-value format: expected {}, got {}",
                kind.as_str(),
                expected.as_str(),
                found.as_str()
            ),
            AttributeError::NotReadable(kind) => write!(f, "{} is not readable", kind.as_str()),
            AttributeError::NotWritable(kind) => write!(f, "{} is not writable", kind.as_str()),
            AttributeError::Unsupported(kind) => write!(f, "{} is not supported", kind.as_str()),
            AttributeError::TableFull => write!(f, "Characteristic table is full"),
        }
    }
}

/// Read/write capability set over typed attributes
pub trait Attributes {
    /// Get the current value of an attribute
    fn read(&self, kind: AttributeKind) -> Result<AttributeValue<'static>, AttributeError>;

    /// Validate and apply a write, returning the resulting output
    fn write(
        &mut self,
        kind: AttributeKind,
        value: AttributeValue<'_>,
    ) -> Result<LightOutput, AttributeError>;
}
