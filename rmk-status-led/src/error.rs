use core::fmt;

use crate::led_bank::LedRole;

/// Errors raised while bringing up the status LEDs.
///
/// Event handling itself never fails; all of these are detected once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// The LED device failed its readiness check
    DeviceNotReady,
    /// No physical LED is assigned to the role
    UnresolvedRole(LedRole),
    /// The role points past the end of the LED device
    IndexOutOfRange { role: LedRole, index: u8 },
    /// The role shares its physical LED with another role
    DuplicateIndex { role: LedRole, index: u8 },
    /// No free slot left in the listener table
    ListenerTableFull,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::DeviceNotReady => write!(f, "LED device is not ready"),
            IndicatorError::UnresolvedRole(role) => write!(f, "no LED assigned to {:?}", role),
            IndicatorError::IndexOutOfRange { role, index } => {
                write!(f, "LED index {} of {:?} is out of range", index, role)
            }
            IndicatorError::DuplicateIndex { role, index } => {
                write!(f, "LED index {} of {:?} is already used by another role", index, role)
            }
            IndicatorError::ListenerTableFull => write!(f, "listener table is full"),
        }
    }
}
