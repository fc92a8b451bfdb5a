use embedded_hal::digital::OutputPin;

use super::LedDevice;

/// The gpio driver is a wrapper for the embedded-hal digital output pin trait.
/// It wraps the low-active and high-active pins, and provides a way to set the pin state
pub struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> OutputController<P> {
    /// Create a new OutputController instance
    pub fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    /// Drive the pin to its active (`true`) or inactive (`false`) level
    pub fn set(&mut self, active: bool) -> Result<(), P::Error> {
        if active != self.low_active {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        }
    }

    /// Activate the GPIO pin
    pub fn activate(&mut self) {
        self.set(true).ok();
    }

    /// Deactivate the GPIO pin
    pub fn deactivate(&mut self) {
        self.set(false).ok();
    }
}

/// A bank of LEDs, each wired to its own GPIO.
pub struct GpioLeds<P: OutputPin, const N: usize> {
    pins: [OutputController<P>; N],
}

impl<P: OutputPin, const N: usize> GpioLeds<P, N> {
    /// Create LEDs from pins sharing the same polarity
    pub fn new(pins: [P; N], low_active: bool) -> Self {
        Self {
            pins: pins.map(|p| OutputController::new(p, low_active)),
        }
    }
}

impl<P: OutputPin, const N: usize> LedDevice for GpioLeds<P, N> {
    fn len(&self) -> usize {
        N
    }

    // A pin that can't be driven at startup means the whole bank is unusable
    fn is_ready(&mut self) -> bool {
        let mut ready = true;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            if pin.set(false).is_err() {
                error!("LED {} failed to initialize", i);
                ready = false;
            }
        }
        ready
    }

    fn set(&mut self, index: usize, on: bool) {
        match self.pins.get_mut(index) {
            Some(pin) => {
                if on {
                    pin.activate()
                } else {
                    pin.deactivate()
                }
            }
            None => warn!("LED index {} out of range", index),
        }
    }
}
