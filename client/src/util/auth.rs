//! Shared auth helpers for route guards and the login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected layouts apply identical redirect / access-denied behavior, and the
//! login page hands the freshly issued token here to pick a landing route.
//!
//! TRADE-OFFS
//! ==========
//! Guard decisions are made after hydration (inside an effect) so the server
//! render and the first browser render agree; until then `Pending` renders a
//! neutral placeholder, never the protected content. The effect tracks the
//! session store, so it re-decides on every login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::ADMIN_ROLE;
use crate::net::claims::decode_claims;
use crate::state::session::{Session, SessionStore};

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const ADMIN_LANDING_ROUTE: &str = "/hotels";

/// Result of checking the session against a route's requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Not evaluated yet (server render, before hydration).
    Pending,
    /// No session; send the user to the login screen.
    Redirect,
    /// Logged in, but without the required role.
    Denied,
    Granted,
}

/// Decide access for `session` on a route that optionally requires `required_role`.
pub fn route_access(session: &Session, required_role: Option<&str>) -> RouteAccess {
    if !session.authenticated || session.token().is_none() {
        return RouteAccess::Redirect;
    }
    match required_role {
        Some(role) if session.role() != Some(role) => RouteAccess::Denied,
        _ => RouteAccess::Granted,
    }
}

/// Landing route for a freshly authenticated role.
pub fn landing_route(role: &str) -> &'static str {
    if role == ADMIN_ROLE { ADMIN_LANDING_ROUTE } else { HOME_ROUTE }
}

/// Store a token issued by the login endpoint and return where to navigate.
///
/// The role tag is read from the token's claims. A token that cannot be
/// decoded is not stored; the user lands on the home route instead.
pub fn complete_login(session: &SessionStore, token: &str) -> &'static str {
    let claims = match decode_claims(token) {
        Ok(claims) => claims,
        Err(e) => {
            log::warn!("failed to decode login token: {e}");
            return HOME_ROUTE;
        }
    };
    match session.login(token, &claims.role) {
        Ok(()) => landing_route(&claims.role),
        Err(e) => {
            log::warn!("login rejected: {e}");
            HOME_ROUTE
        }
    }
}

/// Evaluate access once the app is hydrated and again after every login or
/// logout, redirecting to `/login` when the session turns anonymous.
///
/// The owning layout stays mounted across child routes, so the re-check is
/// what keeps a 401 on one page from leaving the next one reachable.
pub fn install_route_guard<F>(session: SessionStore, required_role: Option<&'static str>, navigate: F) -> RwSignal<RouteAccess>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let access = RwSignal::new(RouteAccess::Pending);
    Effect::new(move || {
        session.track();
        let next = route_access(&session.snapshot(), required_role);
        if next == RouteAccess::Redirect && access.get_untracked() != RouteAccess::Redirect {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
        access.set(next);
    });
    access
}
