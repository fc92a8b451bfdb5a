//! Keyboard state events

use rmk_status_types::led_indicator::LedIndicator;

/// LED indicator state changed event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedIndicatorEvent {
    pub indicator: LedIndicator,
}
