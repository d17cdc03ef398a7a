use super::*;
use crux_core::testing::AppTester;

use crate::events::{ScanEvent, SessionEvent, UiEvent, WifiEvent};

#[test]
fn sign_in_submit_sets_the_pending_flag() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(
        Event::Session(SessionEvent::SignInSubmit {
            username: "admin".to_string(),
            password: "pass".to_string(),
            remember_me: false,
        }),
        &mut model,
    );

    assert!(model.sign_in_pending);
}

#[test]
fn load_settings_sets_loading() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Wifi(WifiEvent::LoadSettings), &mut model);

    assert!(model.wifi_settings.loading);
}

#[test]
fn scan_start_routes_to_the_scanner() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();

    let _command = app.update(Event::Scan(ScanEvent::Start), &mut model);

    assert_eq!(model.scan.state, ScanState::Requesting);
}

#[test]
fn clear_notifications_empties_the_queue() {
    let app = AppTester::<App>::default();
    let mut model = Model::default();
    model.notify_error("Problem fetching: Invalid status code: 500");

    let _command = app.update(Event::Ui(UiEvent::ClearNotifications), &mut model);

    assert!(model.notifications.is_empty());
}

#[test]
fn view_excludes_the_raw_credential() {
    let model = Model {
        credential: Some("secret-token".to_string()),
        ..Default::default()
    };

    let serialized = serde_json::to_string(&model).unwrap();

    assert!(!serialized.contains("secret-token"));
}
