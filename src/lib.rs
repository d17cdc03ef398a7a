pub mod api;
pub mod commands;
pub mod events;
pub mod gate;
pub mod http_helpers;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(test)]
mod tests;

use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::socket::{SocketOperation, SocketOutput},
    commands::storage::{StorageOperation, StorageOutput},
    commands::timer::{TimerOperation, TimerOutput},
    events::Event,
    http_helpers::{build_url, FetchError, ScanPoll, BASE_URL},
    model::Model,
    types::*,
};
pub use crux_http::Result as HttpResult;

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Http(crux_http::protocol::HttpRequest),
    Storage(StorageOperation),
    Timer(TimerOperation),
    Socket(SocketOperation),
}

pub type HttpCmd = crux_http::command::Http<Effect, Event>;
pub type StorageCmd = crate::commands::storage::Storage<Effect, Event>;
pub type TimerCmd = crate::commands::timer::Timer<Effect, Event>;
pub type SocketCmd = crate::commands::socket::Socket<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = Model;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        model.clone()
    }
}
