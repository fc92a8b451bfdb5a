//! Logical view of the status LEDs.
//!
//! The [`LedBank`] resolves every [`LedRole`] to a physical LED once, at startup,
//! so the indicator logic only ever talks about roles.

use crate::config::LedRoleConfig;
use crate::driver::LedDevice;
use crate::error::IndicatorError;
use crate::NUM_BLE_PROFILE;

/// Number of logical LED roles: USB, one per BLE profile and Caps Lock
pub const NUM_LED_ROLES: usize = NUM_BLE_PROFILE + 2;

/// Logical role of a status LED
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedRole {
    Usb,
    Ble(u8),
    CapsLock,
}

impl LedRole {
    /// All roles, in slot order
    pub const ALL: [LedRole; NUM_LED_ROLES] = [
        LedRole::Usb,
        LedRole::Ble(0),
        LedRole::Ble(1),
        LedRole::Ble(2),
        LedRole::CapsLock,
    ];

    /// Role of the LED for a BLE profile, `None` if the profile has no LED
    pub fn ble(profile: usize) -> Option<Self> {
        if profile < NUM_BLE_PROFILE {
            Some(LedRole::Ble(profile as u8))
        } else {
            None
        }
    }

    // Position of the role in `ALL`
    fn slot(&self) -> Option<usize> {
        match self {
            LedRole::Usb => Some(0),
            LedRole::Ble(profile) if (*profile as usize) < NUM_BLE_PROFILE => Some(1 + *profile as usize),
            LedRole::Ble(_) => None,
            LedRole::CapsLock => Some(NUM_LED_ROLES - 1),
        }
    }
}

/// The status LEDs addressed by role.
///
/// The bank only writes, it never reads LED state back.
pub struct LedBank<D: LedDevice> {
    device: D,
    indices: [usize; NUM_LED_ROLES],
}

impl<D: LedDevice> LedBank<D> {
    /// Check the device readiness and resolve all roles.
    ///
    /// Fails if the device isn't ready, or if any role is missing, out of range or shares an LED with another role.
    pub fn new(mut device: D, config: &LedRoleConfig) -> Result<Self, IndicatorError> {
        if !device.is_ready() {
            error!("Status LED device is not ready");
            return Err(IndicatorError::DeviceNotReady);
        }

        let mut indices = [0; NUM_LED_ROLES];
        for (slot, role) in LedRole::ALL.into_iter().enumerate() {
            let index = config.index(role).ok_or(IndicatorError::UnresolvedRole(role))?;
            if index as usize >= device.len() {
                return Err(IndicatorError::IndexOutOfRange { role, index });
            }
            if indices[..slot].contains(&(index as usize)) {
                return Err(IndicatorError::DuplicateIndex { role, index });
            }
            indices[slot] = index as usize;
        }
        debug!("Status LED roles resolved: {:?}", indices);

        Ok(Self { device, indices })
    }

    /// Turn the LED of `role` on or off
    pub fn set(&mut self, role: LedRole, on: bool) {
        match role.slot().and_then(|slot| self.indices.get(slot)) {
            Some(&index) => self.device.set(index, on),
            None => warn!("No LED for {:?}", role),
        }
    }

    pub fn on(&mut self, role: LedRole) {
        self.set(role, true);
    }

    pub fn off(&mut self, role: LedRole) {
        self.set(role, false);
    }

    /// Physical index of the LED serving `role`
    pub fn index_of(&self, role: LedRole) -> Option<usize> {
        role.slot().and_then(|slot| self.indices.get(slot)).copied()
    }

    pub fn device(&self) -> &D {
        &self.device
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeLeds {
        len: usize,
        ready: bool,
        state: [bool; 8],
    }

    impl FakeLeds {
        fn new(len: usize) -> Self {
            Self {
                len,
                ready: true,
                state: [false; 8],
            }
        }
    }

    impl LedDevice for FakeLeds {
        fn len(&self) -> usize {
            self.len
        }

        fn is_ready(&mut self) -> bool {
            self.ready
        }

        fn set(&mut self, index: usize, on: bool) {
            self.state[index] = on;
        }
    }

    #[test]
    fn test_roles_follow_config() {
        let config = LedRoleConfig {
            usb: Some(4),
            ble: [Some(3), Some(2), Some(1)],
            caps_lock: Some(0),
        };
        let mut bank = LedBank::new(FakeLeds::new(5), &config).unwrap();
        bank.on(LedRole::Usb);
        bank.on(LedRole::Ble(2));

        assert_eq!(bank.index_of(LedRole::CapsLock), Some(0));
        assert_eq!(bank.device().state[..5], [false, true, false, false, true]);
    }

    #[test]
    fn test_not_ready_device_fails() {
        let mut leds = FakeLeds::new(5);
        leds.ready = false;
        let result = LedBank::new(leds, &LedRoleConfig::default());
        assert_eq!(result.err(), Some(IndicatorError::DeviceNotReady));
    }

    #[test]
    fn test_missing_role_fails() {
        let config = LedRoleConfig {
            caps_lock: None,
            ..Default::default()
        };
        let result = LedBank::new(FakeLeds::new(5), &config);
        assert_eq!(result.err(), Some(IndicatorError::UnresolvedRole(LedRole::CapsLock)));
    }

    #[test]
    fn test_index_out_of_range_fails() {
        let result = LedBank::new(FakeLeds::new(4), &LedRoleConfig::default());
        assert_eq!(
            result.err(),
            Some(IndicatorError::IndexOutOfRange {
                role: LedRole::CapsLock,
                index: 4
            })
        );
    }

    #[test]
    fn test_duplicate_index_fails() {
        let config = LedRoleConfig {
            ble: [Some(1), Some(1), Some(3)],
            ..Default::default()
        };
        let result = LedBank::new(FakeLeds::new(5), &config);
        assert_eq!(
            result.err(),
            Some(IndicatorError::DuplicateIndex {
                role: LedRole::Ble(1),
                index: 1
            })
        );
    }
}
