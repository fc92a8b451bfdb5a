//! Connection related types

use crate::NUM_BLE_PROFILE;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectionType {
    Usb,
    Ble,
}

impl From<u8> for ConnectionType {
    fn from(value: u8) -> Self {
        match value {
            0 => ConnectionType::Usb,
            1 => ConnectionType::Ble,
            _ => ConnectionType::Usb,
        }
    }
}

impl From<ConnectionType> for u8 {
    fn from(value: ConnectionType) -> Self {
        match value {
            ConnectionType::Usb => 0,
            ConnectionType::Ble => 1,
        }
    }
}

/// The output endpoint that keyboard reports are currently sent to.
///
/// `profile` is only meaningful when `transport` is [`ConnectionType::Ble`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Endpoint {
    pub transport: ConnectionType,
    pub profile: u8,
}

impl Endpoint {
    pub const fn usb() -> Self {
        Self {
            transport: ConnectionType::Usb,
            profile: 0,
        }
    }

    pub const fn ble(profile: u8) -> Self {
        Self {
            transport: ConnectionType::Ble,
            profile,
        }
    }

    /// Index of the selected BLE profile, `None` for USB or an out of range profile
    pub fn ble_profile(&self) -> Option<usize> {
        match self.transport {
            ConnectionType::Ble if (self.profile as usize) < NUM_BLE_PROFILE => Some(self.profile as usize),
            _ => None,
        }
    }
}

/// Link status of a BLE profile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProfileStatus {
    /// The profile has stored bonding information
    pub bonded: bool,
    /// The profile has an active BLE link
    pub connected: bool,
}

impl ProfileStatus {
    pub const fn new(bonded: bool, connected: bool) -> Self {
        Self { bonded, connected }
    }
}
