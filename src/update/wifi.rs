use crux_core::Command;

use crate::api::{WIFI_SETTINGS_ENDPOINT, WIFI_STATUS_ENDPOINT};
use crate::events::{Event, WifiEvent};
use crate::model::Model;
use crate::update::resource;
use crate::Effect;
use crate::{load_resource, save_resource};

/// Handle WiFi station events (settings and connection status)
pub fn handle(event: WifiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        WifiEvent::LoadSettings => load_resource!(
            model,
            wifi_settings,
            WIFI_SETTINGS_ENDPOINT,
            Wifi,
            WifiEvent,
            SettingsLoaded
        ),
        WifiEvent::SettingsLoaded(result) => {
            resource::finish_load(model, |m| &mut m.wifi_settings, result)
        }
        WifiEvent::EditSettings(settings) => {
            resource::set_data(model, |m| &mut m.wifi_settings, settings)
        }
        WifiEvent::SettingsFieldChanged { name, value } => {
            resource::change_field(model, |m| &mut m.wifi_settings, &name, value)
        }
        WifiEvent::SaveSettings => save_resource!(
            model,
            wifi_settings,
            WIFI_SETTINGS_ENDPOINT,
            Wifi,
            WifiEvent,
            SettingsSaved
        ),
        WifiEvent::SettingsSaved(result) => {
            resource::finish_save(model, |m| &mut m.wifi_settings, result)
        }

        WifiEvent::LoadStatus => load_resource!(
            model,
            wifi_status,
            WIFI_STATUS_ENDPOINT,
            Wifi,
            WifiEvent,
            StatusLoaded
        ),
        WifiEvent::StatusLoaded(result) => {
            resource::finish_load(model, |m| &mut m.wifi_status, result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WiFiSettings;

    #[test]
    fn load_settings_flags_the_load_in_progress() {
        let mut model = Model::default();
        model.wifi_settings.set_data(WiFiSettings::default());

        let _ = handle(WifiEvent::LoadSettings, &mut model);

        assert!(model.wifi_settings.loading);
        // Stale data is dropped while the load is in flight
        assert!(model.wifi_settings.data.is_none());
    }

    #[test]
    fn save_without_loaded_data_is_rejected_locally() {
        let mut model = Model::default();

        let _ = handle(WifiEvent::SaveSettings, &mut model);

        assert!(!model.wifi_settings.loading);
        assert_eq!(model.notifications[0].message, "No data to save.");
    }

    #[test]
    fn save_keeps_the_body_while_in_flight() {
        let mut model = Model::default();
        model.wifi_settings.set_data(WiFiSettings {
            ssid: "garden".to_string(),
            ..Default::default()
        });

        let _ = handle(WifiEvent::SaveSettings, &mut model);

        assert!(model.wifi_settings.loading);
        assert_eq!(
            model.wifi_settings.data.as_ref().map(|d| d.ssid.as_str()),
            Some("garden")
        );
    }
}
