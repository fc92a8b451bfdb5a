//! Mapping from keyboard events to status LED patterns.

use embassy_time::{Duration, Instant};
use rmk_status_types::NUM_BLE_PROFILE;
use rmk_status_types::connection::{ConnectionType, Endpoint};
use rmk_status_types::led_indicator::LedIndicator;

use crate::config::IndicatorConfig;
use crate::driver::LedDevice;
use crate::event::ButtonId;
use crate::led_bank::{LedBank, LedRole};
use crate::state::KeyboardStatus;
use crate::timer::{BlinkTimer, TimerExpiry};

/// The BLE LED currently driven by the [`BlinkTimer`].
///
/// At most one LED is the timer target at a time, arming a new target replaces the previous one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkSession {
    /// LED which the timer targets
    pub active: Option<LedRole>,
    /// `true` for a repeating blink, `false` for a one-shot dwell
    pub blinking: bool,
    /// Current phase of the blink
    pub lit: bool,
}

pub struct IndicatorPolicy<D: LedDevice, S: KeyboardStatus> {
    bank: LedBank<D>,
    status: S,
    timer: BlinkTimer,
    session: BlinkSession,
    caps_lock: bool,
    blink_interval: Duration,
    dwell_time: Duration,
}

impl<D: LedDevice, S: KeyboardStatus> IndicatorPolicy<D, S> {
    pub fn new(bank: LedBank<D>, status: S, config: &IndicatorConfig) -> Self {
        Self {
            bank,
            status,
            timer: BlinkTimer::new(),
            session: BlinkSession::default(),
            caps_lock: false,
            blink_interval: config.blink_interval,
            dwell_time: config.dwell_time,
        }
    }

    /// Repaint the output LEDs for a newly selected endpoint
    pub fn on_endpoint_changed(&mut self, endpoint: Endpoint) {
        if endpoint.transport == ConnectionType::Ble && endpoint.ble_profile().is_none() {
            warn!("Ignoring endpoint with invalid BLE profile {}", endpoint.profile);
            return;
        }

        // Start from a clean baseline, a stale blink must not survive the repaint
        self.timer.cancel();
        self.session = BlinkSession::default();
        self.bank.off(LedRole::Usb);
        for profile in 0..NUM_BLE_PROFILE {
            self.bank.off(LedRole::Ble(profile as u8));
        }

        let Some(profile) = endpoint.ble_profile() else {
            info!("Output endpoint: USB");
            self.bank.on(LedRole::Usb);
            return;
        };

        let role = LedRole::Ble(profile as u8);
        let status = self.status.profile_status(profile as u8);
        info!("Output endpoint: BLE profile {}, {:?}", profile, status);
        match (status.bonded, status.connected) {
            (true, true) => self.bank.on(role),
            (true, false) => {
                // Bonded but disconnected has no pattern of its own, the LED stays off
                debug!("BLE profile {} is bonded but not connected", profile);
            }
            (false, _) => {
                self.session.active = Some(role);
                if !status.connected {
                    self.session.blinking = true;
                    self.session.lit = false;
                    self.timer.arm_repeating(self.blink_interval);
                } else {
                    self.session.blinking = false;
                    self.session.lit = true;
                    self.bank.on(role);
                    self.timer.arm_one_shot(self.dwell_time);
                }
            }
        }
    }

    /// Follow the host reported Caps Lock state
    pub fn on_led_indicator(&mut self, indicator: LedIndicator) {
        self.caps_lock = indicator.caps_lock();
        debug!("Caps Lock indicator: {}", self.caps_lock);
        self.bank.set(LedRole::CapsLock, self.caps_lock);
    }

    /// Show the selected profile's LED for the dwell time
    pub fn on_profile_select(&mut self, profile: u8) {
        let Some(role) = LedRole::ble(profile as usize) else {
            warn!("Ignoring selection of invalid BLE profile {}", profile);
            return;
        };

        // The previous timer target loses its timer, so it must not be left lit
        if let Some(previous) = self.session.active.filter(|r| *r != role) {
            self.bank.off(previous);
        }
        self.timer.cancel();

        info!("BLE profile {} selected", profile);
        self.session = BlinkSession {
            active: Some(role),
            blinking: false,
            lit: true,
        };
        self.bank.on(role);
        self.timer.arm_one_shot(self.dwell_time);
    }

    /// Output mode button, only clears the USB LED
    pub fn on_mode_change(&mut self, button: ButtonId) {
        match button {
            ButtonId::OutputToggle | ButtonId::OutputBle => {
                debug!("Output mode button {:?}, USB LED off", button);
                self.bank.off(LedRole::Usb);
            }
            _ => {}
        }
    }

    /// Handle a timer expiry which is due at `now`, does nothing if no expiry is due.
    pub fn on_timer_tick(&mut self, now: Instant) {
        match self.timer.poll(now) {
            Some(TimerExpiry::Period) => {
                if let Some(role) = self.session.active {
                    self.session.lit = !self.session.lit;
                    trace!("Blink {:?}: {}", role, self.session.lit);
                    self.bank.set(role, self.session.lit);
                }
            }
            Some(TimerExpiry::OneShot) => {
                if let Some(role) = self.session.active.take() {
                    trace!("Dwell of {:?} finished", role);
                    self.bank.off(role);
                }
                self.session.blinking = false;
                self.session.lit = false;
            }
            None => {}
        }
    }

    /// Paint the LEDs from the current keyboard status
    pub fn sync(&mut self) {
        let endpoint = self.status.selected_endpoint();
        let indicator = self.status.led_indicator();
        self.on_endpoint_changed(endpoint);
        self.on_led_indicator(indicator);
    }

    pub fn bank(&self) -> &LedBank<D> {
        &self.bank
    }

    pub fn timer(&self) -> &BlinkTimer {
        &self.timer
    }

    pub fn session(&self) -> &BlinkSession {
        &self.session
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn caps_lock(&self) -> bool {
        self.caps_lock
    }
}
