use crux_core::{render::render, Command};

use crate::api::{
    FACTORY_RESET_ENDPOINT, OTA_SETTINGS_ENDPOINT, RESTART_ENDPOINT, SYSTEM_STATUS_ENDPOINT,
};
use crate::authorized_post;
use crate::events::{Event, SystemEvent};
use crate::http_helpers::{process_status_response, FetchError};
use crate::model::Model;
use crate::update::{resource, session};
use crate::Effect;
use crate::{load_resource, save_resource};

/// Handle system events (status, OTA settings, restart, factory reset)
pub fn handle(event: SystemEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SystemEvent::LoadStatus => load_resource!(
            model,
            system_status,
            SYSTEM_STATUS_ENDPOINT,
            System,
            SystemEvent,
            StatusLoaded
        ),
        SystemEvent::StatusLoaded(result) => {
            resource::finish_load(model, |m| &mut m.system_status, result)
        }

        SystemEvent::LoadOtaSettings => load_resource!(
            model,
            ota_settings,
            OTA_SETTINGS_ENDPOINT,
            System,
            SystemEvent,
            OtaSettingsLoaded
        ),
        SystemEvent::OtaSettingsLoaded(result) => {
            resource::finish_load(model, |m| &mut m.ota_settings, result)
        }
        SystemEvent::EditOtaSettings(settings) => {
            resource::set_data(model, |m| &mut m.ota_settings, settings)
        }
        SystemEvent::OtaSettingsFieldChanged { name, value } => {
            resource::change_field(model, |m| &mut m.ota_settings, &name, value)
        }
        SystemEvent::SaveOtaSettings => save_resource!(
            model,
            ota_settings,
            OTA_SETTINGS_ENDPOINT,
            System,
            SystemEvent,
            OtaSettingsSaved
        ),
        SystemEvent::OtaSettingsSaved(result) => {
            resource::finish_save(model, |m| &mut m.ota_settings, result)
        }

        SystemEvent::Restart => Command::all([
            render(),
            authorized_post!(model, RESTART_ENDPOINT, |result| {
                Event::System(SystemEvent::RestartResponse(process_status_response(
                    result,
                )))
            }),
        ]),
        SystemEvent::RestartResponse(result) => handle_operation_response(
            result,
            model,
            "Device is restarting",
            "Problem restarting device",
        ),

        SystemEvent::FactoryReset => Command::all([
            render(),
            authorized_post!(model, FACTORY_RESET_ENDPOINT, |result| {
                Event::System(SystemEvent::FactoryResetResponse(process_status_response(
                    result,
                )))
            }),
        ]),
        SystemEvent::FactoryResetResponse(result) => handle_operation_response(
            result,
            model,
            "Factory reset in progress.",
            "Problem performing factory reset",
        ),
    }
}

/// Restart and factory reset share their response shape: a `200`
/// acknowledges the request, the device goes away shortly after.
fn handle_operation_response(
    result: Result<(), FetchError>,
    model: &mut Model,
    success: &str,
    failure: &str,
) -> Command<Effect, Event> {
    match result {
        Ok(()) => {
            model.notify_info(success);
            render()
        }
        Err(FetchError::Unauthorized) => session::expire_session(model),
        Err(error) => model.error_and_render(format!("{failure}: {error}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Principal, SessionState, Severity};

    #[test]
    fn acknowledged_restart_notifies_without_error_styling() {
        let mut model = Model::default();

        let _ = handle(SystemEvent::RestartResponse(Ok(())), &mut model);

        assert_eq!(model.notifications[0].severity, Severity::Info);
        assert_eq!(model.notifications[0].message, "Device is restarting");
    }

    #[test]
    fn failed_factory_reset_reports_the_status() {
        let mut model = Model::default();

        let _ = handle(
            SystemEvent::FactoryResetResponse(Err(FetchError::UnexpectedStatus(500))),
            &mut model,
        );

        assert_eq!(
            model.notifications[0].message,
            "Problem performing factory reset: Invalid status code: 500"
        );
        assert_eq!(model.notifications[0].severity, Severity::Error);
    }

    #[test]
    fn unauthorized_restart_expires_the_session() {
        let mut model = Model {
            credential: Some("token".to_string()),
            session: SessionState::Authenticated(Principal {
                username: "admin".to_string(),
                admin: true,
            }),
            ..Default::default()
        };

        let _ = handle(
            SystemEvent::RestartResponse(Err(FetchError::Unauthorized)),
            &mut model,
        );

        assert!(model.credential.is_none());
        assert_eq!(model.session, SessionState::Unauthenticated);
    }
}
