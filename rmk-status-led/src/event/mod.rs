//! Event system for the status LEDs
//!
//! This module provides:
//! - Events consumed by the indicators (endpoint, lock indicator, buttons)
//! - The listener table which dispatches them

mod button;
mod connection;
mod keyboard_state;
pub mod listener;

pub use button::{ButtonAction, ButtonEvent, ButtonId};
pub use connection::EndpointChangedEvent;
pub use keyboard_state::LedIndicatorEvent;
pub use listener::EventListeners;

/// Kinds of events, used as the key of the listener table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventKind {
    EndpointChanged,
    LedIndicator,
    Button,
}

/// All events handled by the status LEDs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorEvent {
    EndpointChanged(EndpointChangedEvent),
    LedIndicator(LedIndicatorEvent),
    Button(ButtonEvent),
}

impl IndicatorEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            IndicatorEvent::EndpointChanged(_) => EventKind::EndpointChanged,
            IndicatorEvent::LedIndicator(_) => EventKind::LedIndicator,
            IndicatorEvent::Button(_) => EventKind::Button,
        }
    }
}

impl From<EndpointChangedEvent> for IndicatorEvent {
    fn from(e: EndpointChangedEvent) -> Self {
        IndicatorEvent::EndpointChanged(e)
    }
}

impl From<LedIndicatorEvent> for IndicatorEvent {
    fn from(e: LedIndicatorEvent) -> Self {
        IndicatorEvent::LedIndicator(e)
    }
}

impl From<ButtonEvent> for IndicatorEvent {
    fn from(e: ButtonEvent) -> Self {
        IndicatorEvent::Button(e)
    }
}
