mod common;
pub(crate) use crate::common::*;

mod run_loop_test {
    use embassy_futures::block_on;
    use embassy_futures::select::{Either, select};
    use embassy_futures::yield_now;
    use rmk_status_led::channel::{INDICATOR_EVENT_CHANNEL, publish_indicator_event, publish_indicator_event_async};
    use rmk_status_led::event::{ButtonEvent, ButtonId, EndpointChangedEvent, LedIndicatorEvent};
    use rmk_status_led::led_bank::LedRole;
    use rmk_status_led::{Endpoint, LedIndicator};

    use super::*;

    async fn settle() {
        for _ in 0..8 {
            yield_now().await;
        }
    }

    // The event channel is a static, keep a single test in this binary
    #[test]
    fn test_run_loop_processes_published_events() {
        INDICATOR_EVENT_CHANNEL.clear();
        let mut h = Harness::new();
        let leds = h.leds;
        let state = h.state;
        state.set_led_indicator(LedIndicator::CAPS_LOCK);

        let main = async {
            match select(h.controller.run(), async {
                // Initial status is painted before any event
                settle().await;
                assert!(led_state(leds, LedRole::Usb));
                assert!(led_state(leds, LedRole::CapsLock));

                state.set_profile_bonded(1, true);
                state.set_profile_connected(1, true);
                state.set_endpoint(Endpoint::ble(1));
                publish_indicator_event(EndpointChangedEvent::new(Endpoint::ble(1)));
                settle().await;
                assert!(!led_state(leds, LedRole::Usb));
                assert!(led_state(leds, LedRole::Ble(1)));

                publish_indicator_event(LedIndicatorEvent {
                    indicator: LedIndicator::new(),
                });
                publish_indicator_event_async(ButtonEvent::press(ButtonId::BleSelect(2))).await;
                settle().await;
                assert!(!led_state(leds, LedRole::CapsLock));
                assert!(led_state(leds, LedRole::Ble(2)));
            })
            .await
            {
                Either::First(_) => unreachable!(),
                Either::Second(_) => {}
            }
        };
        block_on(main);
    }
}
