#![allow(dead_code)]

use core::sync::atomic::{AtomicBool, Ordering};

use rmk_status_led::config::IndicatorConfig;
use rmk_status_led::driver::LedDevice;
use rmk_status_led::event::{ButtonEvent, ButtonId, EndpointChangedEvent, IndicatorEvent, LedIndicatorEvent};
use rmk_status_led::led_bank::LedRole;
use rmk_status_led::state::KeyboardState;
use rmk_status_led::{Endpoint, LedIndicator, StatusLedController};

// Init logger for tests
#[ctor::ctor]
unsafe fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const NUM_TEST_LEDS: usize = 5;

/// LED states which stay readable while the controller owns the device
pub type LedStates = [AtomicBool; NUM_TEST_LEDS];

/// In-memory LED device
pub struct TestLeds {
    states: &'static LedStates,
    ready: bool,
}

impl TestLeds {
    pub fn new() -> (Self, &'static LedStates) {
        // Box::leak is acceptable in tests
        let states: &'static LedStates = Box::leak(Box::new(Default::default()));
        (Self { states, ready: true }, states)
    }

    pub fn not_ready() -> Self {
        let (mut leds, _) = Self::new();
        leds.ready = false;
        leds
    }
}

impl LedDevice for TestLeds {
    fn len(&self) -> usize {
        NUM_TEST_LEDS
    }

    fn is_ready(&mut self) -> bool {
        self.ready
    }

    fn set(&mut self, index: usize, on: bool) {
        self.states[index].store(on, Ordering::SeqCst);
    }
}

pub type TestController = StatusLedController<TestLeds, &'static KeyboardState>;

pub struct Harness {
    pub controller: TestController,
    pub leds: &'static LedStates,
    pub state: &'static KeyboardState,
}

impl Harness {
    pub fn new() -> Self {
        let (device, leds) = TestLeds::new();
        let state: &'static KeyboardState = Box::leak(Box::new(KeyboardState::new()));
        let controller = StatusLedController::new(device, state, IndicatorConfig::default()).unwrap();
        Self {
            controller,
            leds,
            state,
        }
    }

    /// State of the LED serving `role`, with the default role mapping
    pub fn led(&self, role: LedRole) -> bool {
        led_state(self.leds, role)
    }

    pub fn ble_leds(&self) -> [bool; 3] {
        [
            self.led(LedRole::Ble(0)),
            self.led(LedRole::Ble(1)),
            self.led(LedRole::Ble(2)),
        ]
    }

    pub fn send(&mut self, event: impl Into<IndicatorEvent>) {
        self.controller.process_event(event.into());
    }

    /// Select a BLE profile with the given link status, then notify the controller
    pub fn select_ble(&mut self, profile: u8, bonded: bool, connected: bool) {
        self.state.set_profile_bonded(profile, bonded);
        self.state.set_profile_connected(profile, connected);
        self.state.set_endpoint(Endpoint::ble(profile));
        self.send(EndpointChangedEvent::new(Endpoint::ble(profile)));
    }

    pub fn select_usb(&mut self) {
        self.state.set_endpoint(Endpoint::usb());
        self.send(EndpointChangedEvent::new(Endpoint::usb()));
    }

    pub fn press(&mut self, id: ButtonId) {
        self.send(ButtonEvent::press(id));
    }

    pub fn indicator(&mut self, indicator: LedIndicator) {
        self.send(LedIndicatorEvent { indicator });
    }

    /// Fire the pending timer expiry, returns `false` if the timer is stopped
    pub fn fire_timer(&mut self) -> bool {
        match self.controller.next_deadline() {
            Some(deadline) => {
                self.controller.on_timer_tick(deadline);
                true
            }
            None => false,
        }
    }
}

pub fn led_state(leds: &LedStates, role: LedRole) -> bool {
    let index = match role {
        LedRole::Usb => 0,
        LedRole::Ble(profile) => 1 + profile as usize,
        LedRole::CapsLock => 4,
    };
    leds[index].load(Ordering::SeqCst)
}
