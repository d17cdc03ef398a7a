//! Network scan state machine.
//!
//! Scanning is the one device operation the firmware cannot answer inline:
//! the start endpoint replies `202` immediately and the list endpoint keeps
//! replying `202` until the radio is done. The core polls on a fixed timer
//! with a hard attempt cap; exhausting it is `TimedOut`, not a failure -
//! the device may still finish, the client just stopped waiting.

use crux_core::{render::render, Command};

use crate::api::{LIST_NETWORKS_ENDPOINT, SCAN_NETWORKS_ENDPOINT};
use crate::authorized_get;
use crate::events::{Event, ScanEvent};
use crate::http_helpers::{
    process_scan_poll_response, process_scan_start_response, FetchError, ScanPoll,
};
use crate::model::Model;
use crate::types::ScanState;
use crate::update::session;
use crate::{Effect, TimerCmd};

pub const SCAN_MAX_POLLS: u8 = 10;
pub const SCAN_POLL_INTERVAL_MS: u64 = 500;

/// Handle scan events
pub fn handle(event: ScanEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ScanEvent::Start => start(model),
        ScanEvent::StartResponse { generation, result } => {
            handle_start_response(generation, result, model)
        }
        ScanEvent::PollTick { generation } => poll(generation, model),
        ScanEvent::PollResponse { generation, result } => {
            handle_poll_response(generation, result, model)
        }
        ScanEvent::Dismiss => {
            model.scan.dismiss();
            render()
        }
    }
}

fn schedule_poll(generation: u32) -> Command<Effect, Event> {
    TimerCmd::delay(SCAN_POLL_INTERVAL_MS)
        .build()
        .then_send(move |_| Event::Scan(ScanEvent::PollTick { generation }))
}

fn start(model: &mut Model) -> Command<Effect, Event> {
    // A scan is already outstanding - a second one must not be started
    if model.scan.in_progress() {
        return Command::done();
    }
    model.scan.begin();
    let generation = model.scan.generation;
    Command::all([
        render(),
        authorized_get!(model, SCAN_NETWORKS_ENDPOINT, move |result| {
            Event::Scan(ScanEvent::StartResponse {
                generation,
                result: process_scan_start_response(result),
            })
        }),
    ])
}

fn handle_start_response(
    generation: u32,
    result: Result<(), FetchError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if generation != model.scan.generation {
        return Command::done();
    }
    match result {
        Ok(()) => {
            model.scan.state = ScanState::Polling { attempt: 0 };
            Command::all([render(), schedule_poll(generation)])
        }
        Err(FetchError::Unauthorized) => {
            model.scan.dismiss();
            session::expire_session(model)
        }
        Err(FetchError::UnexpectedStatus(status)) => scan_failed(
            model,
            format!("Scanning for networks returned unexpected response code: {status}"),
        ),
        Err(error) => scan_failed(model, error.to_string()),
    }
}

/// A scheduled poll fired. Stale timers - a newer scan took over, or the
/// owning view dismissed the session - must not reach the network.
fn poll(generation: u32, model: &mut Model) -> Command<Effect, Event> {
    if generation != model.scan.generation
        || !matches!(model.scan.state, ScanState::Polling { .. })
    {
        return Command::done();
    }
    authorized_get!(model, LIST_NETWORKS_ENDPOINT, move |result| {
        Event::Scan(ScanEvent::PollResponse {
            generation,
            result: process_scan_poll_response(result),
        })
    })
}

fn handle_poll_response(
    generation: u32,
    result: Result<ScanPoll, FetchError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    if generation != model.scan.generation {
        return Command::done();
    }
    let ScanState::Polling { attempt } = model.scan.state else {
        return Command::done();
    };
    match result {
        Ok(ScanPoll::Ready(mut list)) => {
            list.sort_by_signal_strength();
            model.scan.state = ScanState::Succeeded;
            model.scan.network_list = Some(list);
            model.scan.error_message = None;
            render()
        }
        Ok(ScanPoll::Pending) => {
            let attempt = attempt + 1;
            if attempt < SCAN_MAX_POLLS {
                model.scan.state = ScanState::Polling { attempt };
                Command::all([render(), schedule_poll(generation)])
            } else {
                let message = "Device did not return network list in timely manner.".to_string();
                model.notify_error(format!("Problem scanning: {message}"));
                model.scan.time_out(message);
                render()
            }
        }
        Err(FetchError::Unauthorized) => {
            model.scan.dismiss();
            session::expire_session(model)
        }
        Err(FetchError::UnexpectedStatus(status)) => scan_failed(
            model,
            format!("Device returned unexpected response code: {status}"),
        ),
        Err(error) => scan_failed(model, error.to_string()),
    }
}

fn scan_failed(model: &mut Model, message: String) -> Command<Effect, Event> {
    model.notify_error(format!("Problem scanning: {message}"));
    model.scan.fail(message);
    render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Principal, ScanSession, SessionState, Severity, WiFiNetwork, WiFiNetworkList,
    };

    fn network(ssid: &str, rssi: i32) -> WiFiNetwork {
        WiFiNetwork {
            rssi,
            ssid: ssid.to_string(),
            bssid: "00:11:22:33:44:55".to_string(),
            channel: 6,
            encryption_type: 4,
        }
    }

    fn polling_model(attempt: u8) -> Model {
        Model {
            scan: ScanSession {
                state: ScanState::Polling { attempt },
                generation: 1,
                network_list: None,
                error_message: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn start_enters_requesting_and_bumps_the_generation() {
        let mut model = Model::default();

        let _ = handle(ScanEvent::Start, &mut model);

        assert_eq!(model.scan.state, ScanState::Requesting);
        assert_eq!(model.scan.generation, 1);
        assert!(model.scan.network_list.is_none());
    }

    #[test]
    fn start_is_a_noop_while_a_scan_is_outstanding() {
        let mut model = polling_model(3);

        let _ = handle(ScanEvent::Start, &mut model);

        assert_eq!(model.scan.state, ScanState::Polling { attempt: 3 });
        assert_eq!(model.scan.generation, 1);
    }

    #[test]
    fn accepted_start_begins_polling_at_attempt_zero() {
        let mut model = Model::default();
        let _ = handle(ScanEvent::Start, &mut model);

        let _ = handle(
            ScanEvent::StartResponse {
                generation: model.scan.generation,
                result: Ok(()),
            },
            &mut model,
        );

        assert_eq!(model.scan.state, ScanState::Polling { attempt: 0 });
    }

    #[test]
    fn rejected_start_fails_with_the_literal_code() {
        let mut model = Model::default();
        let _ = handle(ScanEvent::Start, &mut model);

        let _ = handle(
            ScanEvent::StartResponse {
                generation: model.scan.generation,
                result: Err(FetchError::UnexpectedStatus(500)),
            },
            &mut model,
        );

        assert_eq!(model.scan.state, ScanState::Failed);
        assert_eq!(
            model.scan.error_message.as_deref(),
            Some("Scanning for networks returned unexpected response code: 500")
        );
        assert_eq!(model.notifications[0].severity, Severity::Error);
    }

    #[test]
    fn nine_pendings_then_ready_succeeds_after_exactly_ten_polls() {
        let mut model = Model::default();
        let _ = handle(ScanEvent::Start, &mut model);
        let generation = model.scan.generation;
        let _ = handle(
            ScanEvent::StartResponse {
                generation,
                result: Ok(()),
            },
            &mut model,
        );

        for expected_attempt in 1..=9u8 {
            let _ = handle(
                ScanEvent::PollResponse {
                    generation,
                    result: Ok(ScanPoll::Pending),
                },
                &mut model,
            );
            assert_eq!(
                model.scan.state,
                ScanState::Polling {
                    attempt: expected_attempt
                }
            );
        }

        let list = WiFiNetworkList {
            networks: vec![network("weak", -88), network("strong", -40)],
        };
        let _ = handle(
            ScanEvent::PollResponse {
                generation,
                result: Ok(ScanPoll::Ready(list)),
            },
            &mut model,
        );

        assert_eq!(model.scan.state, ScanState::Succeeded);
        let networks = &model.scan.network_list.as_ref().unwrap().networks;
        assert_eq!(networks[0].ssid, "strong");
        assert_eq!(networks[1].ssid, "weak");
    }

    #[test]
    fn permanently_pending_scan_times_out_after_the_tenth_poll() {
        let mut model = polling_model(0);

        for _ in 0..10 {
            let _ = handle(
                ScanEvent::PollResponse {
                    generation: 1,
                    result: Ok(ScanPoll::Pending),
                },
                &mut model,
            );
        }

        assert_eq!(model.scan.state, ScanState::TimedOut);
        assert_eq!(
            model.scan.error_message.as_deref(),
            Some("Device did not return network list in timely manner.")
        );
        assert_eq!(model.notifications.len(), 1);

        // An eleventh response changes nothing and schedules nothing
        let _ = handle(
            ScanEvent::PollResponse {
                generation: 1,
                result: Ok(ScanPoll::Pending),
            },
            &mut model,
        );
        assert_eq!(model.scan.state, ScanState::TimedOut);
        assert_eq!(model.notifications.len(), 1);
    }

    #[test]
    fn stale_generation_responses_are_discarded() {
        let mut model = polling_model(2);
        model.scan.generation = 5;

        let _ = handle(
            ScanEvent::PollResponse {
                generation: 4,
                result: Ok(ScanPoll::Ready(WiFiNetworkList::default())),
            },
            &mut model,
        );

        assert_eq!(model.scan.state, ScanState::Polling { attempt: 2 });
        assert!(model.scan.network_list.is_none());
    }

    #[test]
    fn dismiss_suppresses_a_pending_poll_timer() {
        let mut model = polling_model(4);
        let stale_generation = model.scan.generation;

        let _ = handle(ScanEvent::Dismiss, &mut model);
        assert_eq!(model.scan.state, ScanState::Idle);

        let _ = handle(
            ScanEvent::PollTick {
                generation: stale_generation,
            },
            &mut model,
        );

        assert_eq!(model.scan.state, ScanState::Idle);
    }

    #[test]
    fn tick_for_a_finished_session_does_not_poll() {
        let mut model = Model {
            scan: ScanSession {
                state: ScanState::Succeeded,
                generation: 2,
                network_list: Some(WiFiNetworkList::default()),
                error_message: None,
            },
            ..Default::default()
        };

        let _ = handle(ScanEvent::PollTick { generation: 2 }, &mut model);

        assert_eq!(model.scan.state, ScanState::Succeeded);
    }

    #[test]
    fn unauthorized_poll_expires_the_session() {
        let mut model = polling_model(1);
        model.credential = Some("token".to_string());
        model.session = SessionState::Authenticated(Principal {
            username: "admin".to_string(),
            admin: true,
        });

        let _ = handle(
            ScanEvent::PollResponse {
                generation: 1,
                result: Err(FetchError::Unauthorized),
            },
            &mut model,
        );

        assert!(model.credential.is_none());
        assert_eq!(model.session, SessionState::Unauthenticated);
        assert_eq!(model.redirect_to.as_deref(), Some("/"));
        assert_eq!(model.scan.state, ScanState::Idle);
    }
}
