mod ap;
mod features;
mod ntp;
mod resource;
mod scanner;
mod security;
mod session;
mod sprinkler;
mod system;
mod ui;
mod upload;
mod wifi;

use crux_core::Command;

use crate::events::{Event, FeaturesEvent};
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Feature flags load first; the session refresh is chained onto it
        Event::Initialize => features::handle(FeaturesEvent::Load, model),

        Event::Session(event) => session::handle(event, model),
        Event::Features(event) => features::handle(event, model),
        Event::Wifi(event) => wifi::handle(event, model),
        Event::Scan(event) => scanner::handle(event, model),
        Event::Ap(event) => ap::handle(event, model),
        Event::Ntp(event) => ntp::handle(event, model),
        Event::Security(event) => security::handle(event, model),
        Event::System(event) => system::handle(event, model),
        Event::Sprinkler(event) => sprinkler::handle(event, model),
        Event::Upload(event) => upload::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
