//! Connection related events

use rmk_status_types::connection::Endpoint;

/// Output endpoint changed event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EndpointChangedEvent {
    pub endpoint: Endpoint,
}

impl EndpointChangedEvent {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}
