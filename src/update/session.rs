use crux_core::{render::render, Command};

use crate::api::{
    ACCESS_TOKEN_KEY, SIGN_IN_ENDPOINT, SIGN_IN_ROUTE, VERIFY_AUTHORIZATION_ENDPOINT,
};
use crate::authorized_get;
use crate::events::{Event, SessionEvent};
use crate::gate::{self, GateDecision, PublicGateDecision};
use crate::http_helpers::{
    build_url, process_sign_in_response, process_status_response, FetchError,
};
use crate::model::Model;
use crate::types::{decode_principal, Principal, SessionState, SignInRequest};
use crate::{Effect, HttpCmd, StorageCmd};

/// Handle session lifecycle events
pub fn handle(event: SessionEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SessionEvent::Refresh => refresh(model),
        SessionEvent::CredentialLoaded(token) => handle_credential_loaded(token, model),
        SessionEvent::VerifyResponse(result) => handle_verify_response(result, model),
        SessionEvent::SignInSubmit {
            username,
            password,
            remember_me,
        } => sign_in_submit(username, password, remember_me, model),
        SessionEvent::SignInResponse {
            remember_me,
            result,
        } => handle_sign_in_response(remember_me, result, model),
        SessionEvent::SignOut => sign_out(model),
        SessionEvent::GuardProtectedRoute { path } => guard_protected_route(path, model),
        SessionEvent::GuardPublicRoute => guard_public_route(model),
        SessionEvent::CredentialPersisted | SessionEvent::CredentialCleared => Command::done(),
    }
}

/// Re-derive the principal. This is the only transition out of
/// `Uninitialized`.
fn refresh(model: &mut Model) -> Command<Effect, Event> {
    if !model.security_enabled() {
        // Firmware built without the security manager: everyone is admin
        model.session = SessionState::Authenticated(Principal {
            username: "admin".to_string(),
            admin: true,
        });
        return render();
    }
    StorageCmd::read(ACCESS_TOKEN_KEY)
        .build()
        .then_send(|output| Event::Session(SessionEvent::CredentialLoaded(output.into_value())))
}

fn handle_credential_loaded(token: Option<String>, model: &mut Model) -> Command<Effect, Event> {
    match token {
        None => {
            model.credential = None;
            model.session = SessionState::Unauthenticated;
            render()
        }
        Some(token) => {
            model.credential = Some(token);
            authorized_get!(model, VERIFY_AUTHORIZATION_ENDPOINT, |result| {
                Event::Session(SessionEvent::VerifyResponse(process_status_response(
                    result,
                )))
            })
        }
    }
}

fn handle_verify_response(
    result: Result<(), FetchError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    match result {
        Ok(()) => match model.credential.as_deref().map(decode_principal) {
            Some(Ok(principal)) => {
                model.session = SessionState::Authenticated(principal);
                render()
            }
            Some(Err(error)) => {
                log::error!("Stored access token does not decode: {error}");
                model.notify_error(format!("Failed to parse JWT: {error}"));
                clear_session(model)
            }
            None => {
                model.session = SessionState::Unauthenticated;
                render()
            }
        },
        Err(error) => {
            // The token is kept; a later refresh may still succeed
            model.session = SessionState::Unauthenticated;
            model.notify_error(format!("Error verifying authorization: {error}"));
            render()
        }
    }
}

fn sign_in_submit(
    username: String,
    password: String,
    remember_me: bool,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.sign_in_pending = true;
    let body = SignInRequest { username, password };
    match HttpCmd::post(build_url(SIGN_IN_ENDPOINT))
        .header("Content-Type", "application/json")
        .body_json(&body)
    {
        Ok(builder) => Command::all([
            render(),
            builder.build().then_send(move |result| {
                Event::Session(SessionEvent::SignInResponse {
                    remember_me,
                    result: process_sign_in_response(result),
                })
            }),
        ]),
        Err(e) => {
            model.sign_in_pending = false;
            model.error_and_render(format!("Failed to serialize sign-in request: {e}"))
        }
    }
}

fn handle_sign_in_response(
    remember_me: bool,
    result: Result<String, FetchError>,
    model: &mut Model,
) -> Command<Effect, Event> {
    model.sign_in_pending = false;
    match result {
        Ok(access_token) => sign_in(access_token, remember_me, model),
        Err(FetchError::Unauthorized) => {
            model.notify_warning("Invalid credentials.");
            render()
        }
        Err(error) => {
            model.notify_warning(error.to_string());
            render()
        }
    }
}

/// Adopt a freshly issued access token. Decode comes first: a token that
/// does not decode is never persisted and never leaves a half-set session.
fn sign_in(access_token: String, remember_me: bool, model: &mut Model) -> Command<Effect, Event> {
    match decode_principal(&access_token) {
        Ok(principal) => {
            model.credential = Some(access_token.clone());
            model.notify_success(format!("Logged in as {}", principal.username));
            model.session = SessionState::Authenticated(principal);
            Command::all([
                render(),
                StorageCmd::write(ACCESS_TOKEN_KEY, access_token, remember_me)
                    .build()
                    .then_send(|_| Event::Session(SessionEvent::CredentialPersisted)),
            ])
        }
        Err(error) => {
            log::error!("Issued access token does not decode: {error}");
            model.notify_error(format!("Failed to parse JWT: {error}"));
            clear_session(model)
        }
    }
}

/// Idempotent: signing out without a session is a no-op apart from the
/// notification and redirect.
fn sign_out(model: &mut Model) -> Command<Effect, Event> {
    model.notify_success("You have signed out.");
    model.redirect_to = Some(SIGN_IN_ROUTE.to_string());
    clear_session(model)
}

/// Forced invalidation after a `401` from any protected call. Same effect
/// as sign-out but with an explanatory, non-error notification. Together
/// with `SignOut` this is the only path that mutates the stored credential.
pub fn expire_session(model: &mut Model) -> Command<Effect, Event> {
    model.notify_info("Please sign in to continue.");
    model.redirect_to = Some(SIGN_IN_ROUTE.to_string());
    clear_session(model)
}

fn clear_session(model: &mut Model) -> Command<Effect, Event> {
    model.invalidate_session();
    Command::all([
        render(),
        StorageCmd::delete(ACCESS_TOKEN_KEY)
            .build()
            .then_send(|_| Event::Session(SessionEvent::CredentialCleared)),
    ])
}

fn guard_protected_route(path: String, model: &mut Model) -> Command<Effect, Event> {
    match gate::guard_protected(&model.session) {
        GateDecision::Defer => Command::done(),
        GateDecision::Admit(_) => Command::done(),
        GateDecision::Deny => {
            model.login_redirect = Some(path);
            model.notify_info("Please sign in to continue.");
            model.redirect_to = Some(SIGN_IN_ROUTE.to_string());
            render()
        }
    }
}

fn guard_public_route(model: &mut Model) -> Command<Effect, Event> {
    match gate::guard_public(&model.session) {
        PublicGateDecision::Render => Command::done(),
        PublicGateDecision::RedirectAway => {
            let destination = model
                .login_redirect
                .take()
                .unwrap_or_else(|| gate::default_route(model.features.as_ref()).to_string());
            model.redirect_to = Some(destination);
            render()
        }
    }
}
