//! Status LED indicators for RMK split keyboards.
//!
//! The crate drives a fixed bank of five LEDs: the USB output LED, one LED per
//! BLE profile and the Caps Lock LED. The [`controller::StatusLedController`]
//! listens to keyboard events (output endpoint changes, HID lock indicators and
//! profile/output buttons) and projects them onto the LEDs, including a blink
//! pattern for profiles that are still advertising and a timed dwell after a
//! profile is selected.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![no_std]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod channel;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod event;
pub mod led_bank;
pub mod state;
pub mod timer;

pub use controller::{SharedStatusLed, StatusLedController};
pub use rmk_status_types::NUM_BLE_PROFILE;
pub use rmk_status_types::connection::{ConnectionType, Endpoint, ProfileStatus};
pub use rmk_status_types::led_indicator::{LedIndicator, LedIndicatorType};

/// Mutex used for all statics shared between tasks and interrupts
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Capacity of the indicator event channel
pub const INDICATOR_EVENT_CHANNEL_SIZE: usize = 8;
/// Maximum number of handlers in the listener table
pub const MAX_LISTENERS: usize = 8;
