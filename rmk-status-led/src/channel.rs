//! Exposed channel which carries events from the keyboard tasks to the status LEDs

pub use embassy_sync::{blocking_mutex, channel};
use embassy_sync::channel::Channel;

use crate::event::IndicatorEvent;
use crate::{INDICATOR_EVENT_CHANNEL_SIZE, RawMutex};

/// Channel for all events consumed by [`crate::StatusLedController::run`]
pub static INDICATOR_EVENT_CHANNEL: Channel<RawMutex, IndicatorEvent, INDICATOR_EVENT_CHANNEL_SIZE> = Channel::new();

/// Publish an indicator event (non-blocking, dropped if the channel is full)
///
/// Example: `publish_indicator_event(EndpointChangedEvent::new(Endpoint::usb()))`
pub fn publish_indicator_event(event: impl Into<IndicatorEvent>) {
    let event = event.into();
    debug!("Publishing indicator event: {:?}", event);
    if INDICATOR_EVENT_CHANNEL.try_send(event).is_err() {
        error!("Send event to indicator channel error, channel is full");
    }
}

/// Publish an indicator event, waits if the channel is full
pub async fn publish_indicator_event_async(event: impl Into<IndicatorEvent>) {
    INDICATOR_EVENT_CHANNEL.send(event.into()).await
}
