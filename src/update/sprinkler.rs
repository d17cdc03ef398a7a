use crux_core::Command;

use crate::api::{SCHEDULE_SETTINGS_ENDPOINT, SPRINKLER_STATUS_SOCKET_PATH};
use crate::events::{Event, SprinklerEvent};
use crate::model::Model;
use crate::update::resource;
use crate::update_field;
use crate::{load_resource, save_resource};
use crate::{Effect, SocketCmd};

/// Handle sprinkler project events: the watering schedule is an ordinary
/// REST resource, the live run status arrives over the status socket.
pub fn handle(event: SprinklerEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SprinklerEvent::LoadSchedule => load_resource!(
            model,
            schedule,
            SCHEDULE_SETTINGS_ENDPOINT,
            Sprinkler,
            SprinklerEvent,
            ScheduleLoaded
        ),
        SprinklerEvent::ScheduleLoaded(result) => {
            resource::finish_load(model, |m| &mut m.schedule, result)
        }
        SprinklerEvent::EditSchedule(schedule) => {
            resource::set_data(model, |m| &mut m.schedule, schedule)
        }
        SprinklerEvent::ScheduleFieldChanged { name, value } => {
            resource::change_field(model, |m| &mut m.schedule, &name, value)
        }
        SprinklerEvent::SaveSchedule => save_resource!(
            model,
            schedule,
            SCHEDULE_SETTINGS_ENDPOINT,
            Sprinkler,
            SprinklerEvent,
            ScheduleSaved
        ),
        SprinklerEvent::ScheduleSaved(result) => {
            resource::finish_save(model, |m| &mut m.schedule, result)
        }

        SprinklerEvent::ConnectStatusSocket => SocketCmd::connect(SPRINKLER_STATUS_SOCKET_PATH)
            .build()
            .then_send(|_| Event::Sprinkler(SprinklerEvent::SocketConnected)),
        SprinklerEvent::DisconnectStatusSocket => SocketCmd::disconnect()
            .build()
            .then_send(|_| Event::Sprinkler(SprinklerEvent::SocketDisconnected)),

        // Pushed by the shell from the status socket
        SprinklerEvent::StatusUpdated(status) => {
            update_field!(model.sprinkler_status, Some(status))
        }
        SprinklerEvent::SocketConnected => update_field!(model.status_socket_connected, true),
        SprinklerEvent::SocketDisconnected => {
            update_field!(
                model.status_socket_connected, false;
                model.sprinkler_status, None
            )
        }
    }
}
