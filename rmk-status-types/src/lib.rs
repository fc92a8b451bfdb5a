#![no_std]

pub mod connection;
pub mod led_indicator;

/// Number of BLE profiles that have a dedicated indicator LED
pub const NUM_BLE_PROFILE: usize = 3;
