//! Shared light handle for `no_std` environments.
//!
//! Owns the single [`LightState`] and hands out exclusive access to
//! protocol callbacks. Built on `critical-section`, so a handle can live
//! in a `static` and be touched from interrupt context.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::attribute::{AttributeError, AttributeKind, AttributeValue, Attributes};
use crate::output::{LightOutput, OutputDriver};
use crate::state::LightState;

/// Light state behind a critical-section mutex
pub struct SharedLight<D: OutputDriver> {
    inner: Mutex<RefCell<LightState<D>>>,
}

impl<D: OutputDriver> SharedLight<D> {
    /// Create a handle owning a fresh powered-off state
    pub const fn new(driver: D) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(LightState::new(driver))),
        }
    }

    /// Run `f` with exclusive access to the light state
    pub fn with<R>(&self, f: impl FnOnce(&mut LightState<D>) -> R) -> R {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            f(&mut state)
        })
    }

    /// Read an attribute of the light
    pub fn read(&self, kind: AttributeKind) -> Result<AttributeValue<'static>, AttributeError> {
        self.with(|state| state.read(kind))
    }

    /// Write an attribute of the light
    pub fn write(
        &self,
        kind: AttributeKind,
        value: AttributeValue<'_>,
    ) -> Result<LightOutput, AttributeError> {
        self.with(|state| state.write(kind, value))
    }
}
