use crux_core::{render::render, Command};

use crate::events::{Event, UploadEvent};
use crate::model::Model;
use crate::types::UploadState;
use crate::update::session;
use crate::Effect;

/// Handle firmware upload events. The shell owns the byte transfer (it
/// needs a cancelable browser upload with progress callbacks) and reports
/// its lifecycle here.
pub fn handle(event: UploadEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        UploadEvent::Started => {
            model.upload_state = UploadState::Uploading { progress: 0 };
            render()
        }
        UploadEvent::Progress(progress) => {
            model.upload_state = UploadState::Uploading { progress };
            render()
        }
        UploadEvent::Completed => {
            model.upload_state = UploadState::Completed;
            model.notify_success("Activating new firmware");
            render()
        }
        UploadEvent::Cancelled => {
            model.upload_state = UploadState::Idle;
            model.notify_warning("Upload cancelled by user");
            render()
        }
        UploadEvent::Failed(message) => {
            model.notify_error(format!("Problem uploading: {message}"));
            model.upload_state = UploadState::Failed { message };
            render()
        }
        UploadEvent::Unauthorized => {
            model.upload_state = UploadState::Idle;
            session::expire_session(model)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn progress_updates_the_upload_state() {
        let mut model = Model::default();

        let _ = handle(UploadEvent::Started, &mut model);
        let _ = handle(UploadEvent::Progress(42), &mut model);

        assert_eq!(model.upload_state, UploadState::Uploading { progress: 42 });
    }

    #[test]
    fn cancellation_is_a_warning_not_an_error() {
        let mut model = Model::default();
        let _ = handle(UploadEvent::Started, &mut model);

        let _ = handle(UploadEvent::Cancelled, &mut model);

        assert_eq!(model.upload_state, UploadState::Idle);
        assert_eq!(model.notifications[0].severity, Severity::Warning);
        assert_eq!(model.notifications[0].message, "Upload cancelled by user");
    }

    #[test]
    fn failure_keeps_the_message_and_reports_an_error() {
        let mut model = Model::default();

        let _ = handle(UploadEvent::Failed("Error during upload".to_string()), &mut model);

        assert_eq!(
            model.upload_state,
            UploadState::Failed {
                message: "Error during upload".to_string()
            }
        );
        assert_eq!(model.notifications[0].severity, Severity::Error);
    }
}
