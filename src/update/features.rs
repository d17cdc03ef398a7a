use crux_core::{render::render, Command};

use crate::api::FEATURES_ENDPOINT;
use crate::events::{Event, FeaturesEvent, SessionEvent};
use crate::http_helpers::{build_url, process_resource_response};
use crate::model::Model;
use crate::update::session;
use crate::{Effect, HttpCmd};

/// Handle feature-flag events. The flags come from an unauthenticated
/// endpoint and must be known before the first session refresh (they decide
/// whether there is a session to refresh at all).
pub fn handle(event: FeaturesEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        FeaturesEvent::Load => HttpCmd::get(build_url(FEATURES_ENDPOINT))
            .build()
            .then_send(|result| {
                Event::Features(FeaturesEvent::Loaded(process_resource_response(result)))
            }),

        FeaturesEvent::Loaded(Ok(features)) => {
            model.features = Some(features);
            Command::all([render(), session::handle(SessionEvent::Refresh, model)])
        }

        FeaturesEvent::Loaded(Err(error)) => {
            log::error!("Feature flags did not load: {error}");
            model.error_and_render(format!("Error loading features: {error}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Features, SessionState};

    #[test]
    fn loaded_flags_are_stored_and_refresh_runs() {
        let mut model = Model::default();

        // security off: the chained refresh resolves synchronously
        let _ = handle(FeaturesEvent::Loaded(Ok(Features::default())), &mut model);

        assert_eq!(model.features, Some(Features::default()));
        assert!(model.session.is_initialized());
    }

    #[test]
    fn load_failure_keeps_the_session_uninitialized() {
        let mut model = Model::default();

        let _ = handle(
            FeaturesEvent::Loaded(Err(crate::http_helpers::FetchError::Transport(
                "network unreachable".to_string(),
            ))),
            &mut model,
        );

        assert!(model.features.is_none());
        assert_eq!(model.session, SessionState::Uninitialized);
        assert_eq!(
            model.notifications[0].message,
            "Error loading features: network unreachable"
        );
    }
}
