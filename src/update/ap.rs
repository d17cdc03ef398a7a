use crux_core::Command;

use crate::api::{AP_SETTINGS_ENDPOINT, AP_STATUS_ENDPOINT};
use crate::events::{ApEvent, Event};
use crate::model::Model;
use crate::update::resource;
use crate::Effect;
use crate::{load_resource, save_resource};

/// Handle access point events (settings and AP status)
pub fn handle(event: ApEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        ApEvent::LoadSettings => load_resource!(
            model,
            ap_settings,
            AP_SETTINGS_ENDPOINT,
            Ap,
            ApEvent,
            SettingsLoaded
        ),
        ApEvent::SettingsLoaded(result) => {
            resource::finish_load(model, |m| &mut m.ap_settings, result)
        }
        ApEvent::EditSettings(settings) => {
            resource::set_data(model, |m| &mut m.ap_settings, settings)
        }
        ApEvent::SettingsFieldChanged { name, value } => {
            resource::change_field(model, |m| &mut m.ap_settings, &name, value)
        }
        ApEvent::SaveSettings => save_resource!(
            model,
            ap_settings,
            AP_SETTINGS_ENDPOINT,
            Ap,
            ApEvent,
            SettingsSaved
        ),
        ApEvent::SettingsSaved(result) => {
            resource::finish_save(model, |m| &mut m.ap_settings, result)
        }

        ApEvent::LoadStatus => load_resource!(
            model,
            ap_status,
            AP_STATUS_ENDPOINT,
            Ap,
            ApEvent,
            StatusLoaded
        ),
        ApEvent::StatusLoaded(result) => resource::finish_load(model, |m| &mut m.ap_status, result),
    }
}
