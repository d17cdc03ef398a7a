//! Route guards.
//!
//! Pure decisions over the session state, passed in explicitly - the event
//! handlers in `update::session` own the side effects (recording the
//! attempted destination, notifying, redirecting).

use crate::api::{PROJECT_DEFAULT_ROUTE, WIFI_DEFAULT_ROUTE};
use crate::types::{Features, Principal, SessionState};

/// Outcome of a navigation attempt to a protected view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Session not yet initialized - render nothing observable
    Defer,
    /// No session - redirect to sign-in
    Deny,
    /// Render the target view for this principal
    Admit(Principal),
}

pub fn guard_protected(session: &SessionState) -> GateDecision {
    match session {
        SessionState::Uninitialized => GateDecision::Defer,
        SessionState::Unauthenticated => GateDecision::Deny,
        SessionState::Authenticated(principal) => GateDecision::Admit(principal.clone()),
    }
}

/// Outcome of a navigation attempt to a public-only view (the sign-in page)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicGateDecision {
    Render,
    /// Already signed in - bounce to the recorded or default destination
    RedirectAway,
}

pub fn guard_public(session: &SessionState) -> PublicGateDecision {
    match session {
        SessionState::Authenticated(_) => PublicGateDecision::RedirectAway,
        _ => PublicGateDecision::Render,
    }
}

/// Where a fresh sign-in lands when no destination was recorded
pub fn default_route(features: Option<&Features>) -> &'static str {
    match features {
        Some(features) if features.project => PROJECT_DEFAULT_ROUTE,
        _ => WIFI_DEFAULT_ROUTE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uninitialized_session_defers() {
        assert_eq!(
            guard_protected(&SessionState::Uninitialized),
            GateDecision::Defer
        );
    }

    #[test]
    fn unauthenticated_session_is_denied() {
        assert_eq!(
            guard_protected(&SessionState::Unauthenticated),
            GateDecision::Deny
        );
    }

    #[test]
    fn authenticated_session_admits_the_principal() {
        let principal = Principal {
            username: "admin".to_string(),
            admin: true,
        };

        assert_eq!(
            guard_protected(&SessionState::Authenticated(principal.clone())),
            GateDecision::Admit(principal)
        );
    }

    #[test]
    fn public_views_redirect_authenticated_sessions_away() {
        let session = SessionState::Authenticated(Principal {
            username: "admin".to_string(),
            admin: false,
        });

        assert_eq!(guard_public(&session), PublicGateDecision::RedirectAway);
        assert_eq!(
            guard_public(&SessionState::Unauthenticated),
            PublicGateDecision::Render
        );
    }

    #[test]
    fn default_route_depends_on_the_project_feature() {
        let with_project = Features {
            project: true,
            ..Default::default()
        };

        assert_eq!(default_route(Some(&with_project)), "/sprinkler/status");
        assert_eq!(default_route(Some(&Features::default())), "/wifi/status");
        assert_eq!(default_route(None), "/wifi/status");
    }
}
