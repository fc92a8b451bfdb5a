//! Keyboard status queried by the indicator logic.

use core::sync::atomic::{AtomicU8, Ordering};

use rmk_status_types::NUM_BLE_PROFILE;
use rmk_status_types::connection::{ConnectionType, Endpoint, ProfileStatus};
use rmk_status_types::led_indicator::LedIndicator;

/// Queries answered by the keyboard's connection and HID stacks.
pub trait KeyboardStatus {
    /// The currently selected output endpoint
    fn selected_endpoint(&self) -> Endpoint;

    /// Bonding and link status of a BLE profile
    fn profile_status(&self, profile: u8) -> ProfileStatus;

    /// Whether the active BLE profile currently has a link
    fn active_profile_connected(&self) -> bool;

    /// Lock key state reported by the host
    fn led_indicator(&self) -> LedIndicator;
}

impl<T: KeyboardStatus> KeyboardStatus for &T {
    fn selected_endpoint(&self) -> Endpoint {
        (**self).selected_endpoint()
    }

    fn profile_status(&self, profile: u8) -> ProfileStatus {
        (**self).profile_status(profile)
    }

    fn active_profile_connected(&self) -> bool {
        (**self).active_profile_connected()
    }

    fn led_indicator(&self) -> LedIndicator {
        (**self).led_indicator()
    }
}

/// Lock-free keyboard status, updated by the USB/BLE tasks and read by the indicators.
///
/// Profile bonding and link state are stored as bit masks, one bit per profile.
pub struct KeyboardState {
    /// Current connection type:
    /// - 0: USB
    /// - 1: BLE
    connection_type: AtomicU8,
    active_profile: AtomicU8,
    bonded: AtomicU8,
    connected: AtomicU8,
    led_indicator: AtomicU8,
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardState {
    pub const fn new() -> Self {
        Self {
            connection_type: AtomicU8::new(0),
            active_profile: AtomicU8::new(0),
            bonded: AtomicU8::new(0),
            connected: AtomicU8::new(0),
            led_indicator: AtomicU8::new(0),
        }
    }

    pub fn set_endpoint(&self, endpoint: Endpoint) {
        self.connection_type
            .store(endpoint.transport.into(), Ordering::Release);
        self.active_profile.store(endpoint.profile, Ordering::Release);
    }

    pub fn set_profile_bonded(&self, profile: u8, bonded: bool) {
        Self::update_mask(&self.bonded, profile, bonded);
    }

    pub fn set_profile_connected(&self, profile: u8, connected: bool) {
        Self::update_mask(&self.connected, profile, connected);
    }

    pub fn set_led_indicator(&self, indicator: LedIndicator) {
        self.led_indicator.store(indicator.into_bits(), Ordering::Release);
    }

    fn update_mask(mask: &AtomicU8, profile: u8, set: bool) {
        if profile as usize >= NUM_BLE_PROFILE {
            warn!("Ignoring status of invalid BLE profile {}", profile);
            return;
        }
        let bit = 1 << profile;
        if set {
            mask.fetch_or(bit, Ordering::AcqRel);
        } else {
            mask.fetch_and(!bit, Ordering::AcqRel);
        }
    }

    fn mask_bit(mask: &AtomicU8, profile: u8) -> bool {
        profile < 8 && mask.load(Ordering::Acquire) & (1 << profile) != 0
    }
}

impl KeyboardStatus for KeyboardState {
    fn selected_endpoint(&self) -> Endpoint {
        Endpoint {
            transport: ConnectionType::from(self.connection_type.load(Ordering::Acquire)),
            profile: self.active_profile.load(Ordering::Acquire),
        }
    }

    fn profile_status(&self, profile: u8) -> ProfileStatus {
        ProfileStatus {
            bonded: Self::mask_bit(&self.bonded, profile),
            connected: Self::mask_bit(&self.connected, profile),
        }
    }

    fn active_profile_connected(&self) -> bool {
        Self::mask_bit(&self.connected, self.active_profile.load(Ordering::Acquire))
    }

    fn led_indicator(&self) -> LedIndicator {
        LedIndicator::from_bits(self.led_indicator.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_masks() {
        let state = KeyboardState::new();
        state.set_endpoint(Endpoint::ble(1));
        state.set_profile_bonded(1, true);
        state.set_profile_connected(1, true);
        state.set_profile_connected(2, true);
        state.set_profile_connected(2, false);

        assert_eq!(state.selected_endpoint(), Endpoint::ble(1));
        assert_eq!(state.profile_status(1), ProfileStatus::new(true, true));
        assert_eq!(state.profile_status(2), ProfileStatus::new(false, false));
        assert!(state.active_profile_connected());
    }

    #[test]
    fn test_invalid_profile_is_ignored() {
        let state = KeyboardState::new();
        state.set_profile_bonded(7, true);
        assert_eq!(state.profile_status(7), ProfileStatus::default());
        assert_eq!(state.profile_status(200), ProfileStatus::default());
    }

    #[test]
    fn test_led_indicator() {
        let state = KeyboardState::new();
        state.set_led_indicator(LedIndicator::CAPS_LOCK);
        assert!(state.led_indicator().caps_lock());
    }
}
