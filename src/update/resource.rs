//! Generic finish-side of the load/edit/save cycle, shared by every REST
//! resource. The start-side (issuing the request) lives in the
//! `load_resource!`/`save_resource!` macros.
//!
//! One operation per resource is expected at a time; the `loading` flag is
//! the caller's only guard and nothing prevents a second save from being
//! fired while the first is in flight. Responses are applied in arrival
//! order - last response wins, there is no sequencing token.

use crux_core::{render::render, Command};
use serde::{de::DeserializeOwned, Serialize};

use crate::events::Event;
use crate::http_helpers::FetchError;
use crate::model::Model;
use crate::types::{apply_field_change, FieldValue, ResourceState};
use crate::update::session;
use crate::Effect;

/// Accessor for the resource field a response belongs to
pub type Select<T> = fn(&mut Model) -> &mut ResourceState<T>;

/// Apply a load response. A `401` expires the session instead of touching
/// the resource (beyond clearing its loading flag).
pub fn finish_load<T>(
    model: &mut Model,
    select: Select<T>,
    result: Result<T, FetchError>,
) -> Command<Effect, Event> {
    match result {
        Ok(data) => {
            select(model).commit(data);
        }
        Err(FetchError::Unauthorized) => {
            select(model).loading = false;
            return session::expire_session(model);
        }
        Err(error) => {
            let message = error.to_string();
            select(model).fail(message.clone());
            model.notify_error(format!("Problem fetching: {message}"));
        }
    }
    render()
}

/// Apply a save response. The server's representation replaces the edited
/// one - client edits are not assumed to have been persisted verbatim.
pub fn finish_save<T>(
    model: &mut Model,
    select: Select<T>,
    result: Result<T, FetchError>,
) -> Command<Effect, Event> {
    match result {
        Ok(data) => {
            select(model).commit(data);
            model.notify_success("Update successful.");
        }
        Err(FetchError::Unauthorized) => {
            select(model).loading = false;
            return session::expire_session(model);
        }
        Err(error) => {
            let message = error.to_string();
            select(model).fail(message.clone());
            model.notify_error(format!("Problem updating: {message}"));
        }
    }
    render()
}

/// Replace the in-memory representation. Local only - no request is issued.
pub fn set_data<T>(model: &mut Model, select: Select<T>, data: T) -> Command<Effect, Event> {
    select(model).set_data(data);
    render()
}

/// Fold one changed form field into the in-memory representation. Local
/// only; edits before anything was loaded are dropped.
pub fn change_field<T>(
    model: &mut Model,
    select: Select<T>,
    name: &str,
    value: FieldValue,
) -> Command<Effect, Event>
where
    T: Serialize + DeserializeOwned,
{
    let state = select(model);
    let updated = match state.data.as_ref() {
        Some(data) => apply_field_change(data, name, value),
        None => return render(),
    };
    match updated {
        Ok(next) => {
            state.data = Some(next);
            render()
        }
        Err(error) => {
            log::error!("Rejected change to field {name}: {error}");
            model.error_and_render(format!("Problem updating field \"{name}\": {error}"))
        }
    }
}
