//! Status LED controller
//!
//! [`StatusLedController`] owns the LED bank, the blink timer and the listener table.
//! Events are dispatched synchronously, one at a time, so every handler runs to completion
//! before the next event or timer expiry is processed.
//!
//! # Usage
//!
//! ```rust,ignore
//! static KEYBOARD_STATE: KeyboardState = KeyboardState::new();
//!
//! let leds = GpioLeds::new([usb, ble0, ble1, ble2, caps], false);
//! let mut controller = StatusLedController::new(leds, &KEYBOARD_STATE, IndicatorConfig::default())?;
//!
//! // In other tasks:
//! // publish_indicator_event(EndpointChangedEvent::new(Endpoint::ble(0)));
//! controller.run().await;
//! ```

mod policy;

use core::cell::RefCell;

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_time::{Instant, Timer};
pub use policy::{BlinkSession, IndicatorPolicy};

use crate::MAX_LISTENERS;
use crate::channel::INDICATOR_EVENT_CHANNEL;
use crate::config::IndicatorConfig;
use crate::driver::LedDevice;
use crate::error::IndicatorError;
use crate::event::{ButtonId, EventKind, EventListeners, IndicatorEvent};
use crate::led_bank::LedBank;
use crate::state::KeyboardStatus;

pub struct StatusLedController<D: LedDevice, S: KeyboardStatus> {
    listeners: EventListeners<IndicatorPolicy<D, S>, MAX_LISTENERS>,
    policy: IndicatorPolicy<D, S>,
}

impl<D: LedDevice, S: KeyboardStatus> StatusLedController<D, S> {
    /// Bring up the status LEDs.
    ///
    /// Fails if the LED device isn't ready or the LED roles can't be resolved, no handler is registered in that case.
    pub fn new(device: D, status: S, config: IndicatorConfig) -> Result<Self, IndicatorError> {
        let bank = LedBank::new(device, &config.leds)?;
        let policy = IndicatorPolicy::new(bank, status, &config);

        let mut listeners: EventListeners<IndicatorPolicy<D, S>, MAX_LISTENERS> = EventListeners::new();
        listeners.subscribe(EventKind::LedIndicator, |p, e| {
            if let IndicatorEvent::LedIndicator(e) = e {
                p.on_led_indicator(e.indicator);
            }
        })?;
        listeners.subscribe(EventKind::EndpointChanged, |p, e| {
            if let IndicatorEvent::EndpointChanged(e) = e {
                p.on_endpoint_changed(e.endpoint);
            }
        })?;
        // Both button handlers see every button event, each picks the buttons it cares about
        listeners.subscribe(EventKind::Button, |p, e| {
            if let IndicatorEvent::Button(e) = e {
                if let (true, ButtonId::BleSelect(profile)) = (e.is_press(), e.id) {
                    p.on_profile_select(profile);
                }
            }
        })?;
        listeners.subscribe(EventKind::Button, |p, e| {
            if let IndicatorEvent::Button(e) = e {
                if e.is_press() {
                    p.on_mode_change(e.id);
                }
            }
        })?;
        info!("Status LEDs initialized");

        Ok(Self { listeners, policy })
    }

    /// Dispatch an event to all handlers subscribed to its kind
    pub fn process_event(&mut self, event: IndicatorEvent) {
        self.listeners.dispatch(&mut self.policy, &event);
    }

    /// Handle a timer expiry which is due at `now`
    pub fn on_timer_tick(&mut self, now: Instant) {
        self.policy.on_timer_tick(now);
    }

    /// Paint the LEDs from the current keyboard status
    pub fn sync(&mut self) {
        self.policy.sync();
    }

    /// Next instant at which [`Self::on_timer_tick`] has work to do
    pub fn next_deadline(&self) -> Option<Instant> {
        self.policy.timer().deadline()
    }

    pub fn policy(&self) -> &IndicatorPolicy<D, S> {
        &self.policy
    }

    /// Run the controller: paint the current status, then process events from
    /// [`INDICATOR_EVENT_CHANNEL`] and timer expiries forever.
    pub async fn run(&mut self) -> ! {
        self.sync();
        let receiver = INDICATOR_EVENT_CHANNEL.receiver();
        loop {
            let deadline = self.next_deadline().unwrap_or(Instant::MAX);
            match select(Timer::at(deadline), receiver.receive()).await {
                Either::First(_) => self.on_timer_tick(Instant::now()),
                Either::Second(event) => self.process_event(event),
            }
        }
    }
}

/// A [`StatusLedController`] shared between execution contexts.
///
/// Use it when events and timer expiries come from different contexts, e.g. a timer interrupt and a task.
/// Every call locks the whole controller, so handlers never interleave.
pub struct SharedStatusLed<M: RawMutex, D: LedDevice, S: KeyboardStatus> {
    inner: Mutex<M, RefCell<StatusLedController<D, S>>>,
}

impl<M: RawMutex, D: LedDevice, S: KeyboardStatus> SharedStatusLed<M, D, S> {
    pub fn new(controller: StatusLedController<D, S>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    pub fn process_event(&self, event: IndicatorEvent) {
        self.lock(|c| c.process_event(event));
    }

    pub fn on_timer_tick(&self, now: Instant) {
        self.lock(|c| c.on_timer_tick(now));
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.lock(|c| c.next_deadline())
    }

    /// Run `f` with exclusive access to the controller
    pub fn lock<R>(&self, f: impl FnOnce(&mut StatusLedController<D, S>) -> R) -> R {
        self.inner.lock(|c| f(&mut *c.borrow_mut()))
    }
}
