use embassy_time::Duration;

use crate::led_bank::LedRole;
use crate::NUM_BLE_PROFILE;

/// Config for the status LEDs.
///
/// There are 2 parts:
/// 1. `leds`: which physical LED of the device serves each logical role.
/// 2. Timing of the BLE profile feedback, `blink_interval` and `dwell_time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorConfig {
    pub leds: LedRoleConfig,
    /// Half period of the "advertising" blink, the LED toggles once per interval
    pub blink_interval: Duration,
    /// How long a profile LED stays on after a selection, before it's turned off
    pub dwell_time: Duration,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            leds: LedRoleConfig::default(),
            blink_interval: Duration::from_millis(500),
            dwell_time: Duration::from_millis(5000),
        }
    }
}

/// Physical LED index of every logical role, `None` if the board doesn't wire it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedRoleConfig {
    pub usb: Option<u8>,
    pub ble: [Option<u8>; NUM_BLE_PROFILE],
    pub caps_lock: Option<u8>,
}

impl Default for LedRoleConfig {
    fn default() -> Self {
        Self {
            usb: Some(0),
            ble: [Some(1), Some(2), Some(3)],
            caps_lock: Some(4),
        }
    }
}

impl LedRoleConfig {
    /// Get the configured LED index of a role
    pub fn index(&self, role: LedRole) -> Option<u8> {
        match role {
            LedRole::Usb => self.usb,
            LedRole::Ble(profile) => self.ble.get(profile as usize).copied().flatten(),
            LedRole::CapsLock => self.caps_lock,
        }
    }
}
