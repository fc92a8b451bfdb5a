//! LED output drivers

pub mod gpio;

/// A fixed set of on/off LEDs addressed by index.
///
/// Writes are fire-and-forget: a failed write is dropped, there is no retry.
pub trait LedDevice {
    /// Number of LEDs in the device
    fn len(&self) -> usize;

    /// Check whether the device can be driven. Called once at startup, before any other write.
    fn is_ready(&mut self) -> bool {
        true
    }

    /// Turn the LED at `index` on or off
    fn set(&mut self, index: usize, on: bool);
}
