use crux_core::{render::render, Command};

use crate::api::{NTP_SETTINGS_ENDPOINT, NTP_STATUS_ENDPOINT, TIME_ENDPOINT};
use crate::authorized_post_json;
use crate::events::{Event, NtpEvent};
use crate::http_helpers::{process_status_response, FetchError};
use crate::model::Model;
use crate::types::TimeSetRequest;
use crate::update::{resource, session};
use crate::Effect;
use crate::{load_resource, save_resource};

/// Handle NTP events (settings, sync status, manual time set)
pub fn handle(event: NtpEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        NtpEvent::LoadSettings => load_resource!(
            model,
            ntp_settings,
            NTP_SETTINGS_ENDPOINT,
            Ntp,
            NtpEvent,
            SettingsLoaded
        ),
        NtpEvent::SettingsLoaded(result) => {
            resource::finish_load(model, |m| &mut m.ntp_settings, result)
        }
        NtpEvent::EditSettings(settings) => {
            resource::set_data(model, |m| &mut m.ntp_settings, settings)
        }
        NtpEvent::SettingsFieldChanged { name, value } => {
            resource::change_field(model, |m| &mut m.ntp_settings, &name, value)
        }
        NtpEvent::SaveSettings => save_resource!(
            model,
            ntp_settings,
            NTP_SETTINGS_ENDPOINT,
            Ntp,
            NtpEvent,
            SettingsSaved
        ),
        NtpEvent::SettingsSaved(result) => {
            resource::finish_save(model, |m| &mut m.ntp_settings, result)
        }

        NtpEvent::LoadStatus => load_resource!(
            model,
            ntp_status,
            NTP_STATUS_ENDPOINT,
            Ntp,
            NtpEvent,
            StatusLoaded
        ),
        NtpEvent::StatusLoaded(result) => {
            resource::finish_load(model, |m| &mut m.ntp_status, result)
        }

        NtpEvent::SetTime { local_time } => {
            let body = TimeSetRequest { local_time };
            authorized_post_json!(model, TIME_ENDPOINT, &body, |result| {
                Event::Ntp(NtpEvent::TimeSet(process_status_response(result)))
            })
        }
        NtpEvent::TimeSet(result) => match result {
            Ok(()) => {
                model.notify_success("Time set successfully");
                // The status view shows the device clock - bring it up to date
                Command::all([render(), handle(NtpEvent::LoadStatus, model)])
            }
            Err(FetchError::Unauthorized) => session::expire_session(model),
            Err(error) => model.error_and_render(format!("Problem setting time: {error}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn successful_time_set_reloads_the_status() {
        let mut model = Model::default();

        let _ = handle(NtpEvent::TimeSet(Ok(())), &mut model);

        assert_eq!(model.notifications[0].message, "Time set successfully");
        // The chained status load is in flight
        assert!(model.ntp_status.loading);
    }

    #[test]
    fn failed_time_set_reports_the_status() {
        let mut model = Model::default();

        let _ = handle(
            NtpEvent::TimeSet(Err(FetchError::UnexpectedStatus(500))),
            &mut model,
        );

        assert_eq!(model.notifications[0].severity, Severity::Error);
        assert_eq!(
            model.notifications[0].message,
            "Problem setting time: Invalid status code: 500"
        );
    }
}
