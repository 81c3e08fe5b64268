//! Per-screen access gate.
//!
//! The check order is load-bearing: the loading check runs strictly before the
//! identity check, which runs strictly before the role check. Evaluating them
//! out of order flashes the wrong UI while the stored session is read back.

use skillshub_shared::models::User;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::loading::Loading;
use crate::routes::Route;
use crate::session::use_session;

/// Outcome of evaluating the guard for one render cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still loading; render a neutral placeholder, take no action.
    Wait,
    /// No identity; send the visitor to the login screen.
    ToLogin,
    /// Identity present but under-privileged; send to the public landing.
    ToHome,
    /// Authorized; render the protected content.
    Render,
}

/// Pure decision function behind the [`Guard`] component.
#[must_use]
pub fn decide(loading: bool, user: Option<&User>, require_admin: bool) -> GuardDecision {
    if loading {
        return GuardDecision::Wait;
    }
    let Some(user) = user else {
        return GuardDecision::ToLogin;
    };
    if require_admin && !user.is_admin() {
        return GuardDecision::ToHome;
    }
    GuardDecision::Render
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub require_admin: bool,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    let session = use_session();
    match decide(session.loading(), session.user(), props.require_admin) {
        GuardDecision::Wait => html! { <Loading /> },
        GuardDecision::ToLogin => html! { <Redirect<Route> to={Route::Login} /> },
        GuardDecision::ToHome => html! { <Redirect<Route> to={Route::Home} /> },
        GuardDecision::Render => props.children.clone(),
    }
}
