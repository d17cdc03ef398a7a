use crux_core::Command;

use crate::api::SECURITY_SETTINGS_ENDPOINT;
use crate::events::{Event, SecurityEvent};
use crate::model::Model;
use crate::update::resource;
use crate::Effect;
use crate::{load_resource, save_resource};

/// Handle security events. The same resource backs both the user management
/// and the token secret views.
pub fn handle(event: SecurityEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SecurityEvent::LoadSettings => load_resource!(
            model,
            security_settings,
            SECURITY_SETTINGS_ENDPOINT,
            Security,
            SecurityEvent,
            SettingsLoaded
        ),
        SecurityEvent::SettingsLoaded(result) => {
            resource::finish_load(model, |m| &mut m.security_settings, result)
        }
        SecurityEvent::EditSettings(settings) => {
            resource::set_data(model, |m| &mut m.security_settings, settings)
        }
        SecurityEvent::SettingsFieldChanged { name, value } => {
            resource::change_field(model, |m| &mut m.security_settings, &name, value)
        }
        SecurityEvent::SaveSettings => save_resource!(
            model,
            security_settings,
            SECURITY_SETTINGS_ENDPOINT,
            Security,
            SecurityEvent,
            SettingsSaved
        ),
        SecurityEvent::SettingsSaved(result) => {
            resource::finish_save(model, |m| &mut m.security_settings, result)
        }
    }
}
