use crux_core::{render::render, Command};

use crate::events::{Event, UiEvent};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle UI bookkeeping events (notification queue, redirect handshake)
pub fn handle(event: UiEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UiEvent::DismissNotification { index } => {
            if index < model.notifications.len() {
                model.notifications.remove(index);
            }
            render()
        }
        UiEvent::ClearNotifications => update_field!(model.notifications, Vec::new()),
        UiEvent::RedirectHandled => update_field!(model.redirect_to, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn dismiss_removes_only_the_addressed_notification() {
        let mut model = Model::default();
        model.notify_error("first");
        model.notify_info("second");

        let _ = handle(UiEvent::DismissNotification { index: 0 }, &mut model);

        assert_eq!(model.notifications.len(), 1);
        assert_eq!(model.notifications[0].message, "second");
        assert_eq!(model.notifications[0].severity, Severity::Info);
    }

    #[test]
    fn dismiss_out_of_range_is_harmless() {
        let mut model = Model::default();

        let _ = handle(UiEvent::DismissNotification { index: 3 }, &mut model);

        assert!(model.notifications.is_empty());
    }

    #[test]
    fn redirect_handshake_clears_the_destination() {
        let mut model = Model {
            redirect_to: Some("/".to_string()),
            ..Default::default()
        };

        let _ = handle(UiEvent::RedirectHandled, &mut model);

        assert!(model.redirect_to.is_none());
    }
}
