mod orders;
mod overview;
mod preferences;
mod profile;
mod security;

use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;

use crate::routes::Route;
use crate::session::use_session;
pub(crate) use orders::{status_badge, status_key};

use orders::OrdersPane;
use overview::OverviewPane;
use preferences::PreferencesPane;
use profile::ProfilePane;
use security::SecurityPane;

/// The per-user dashboard screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardSection {
    Overview,
    Profile,
    Orders,
    Security,
    Preferences,
}

impl DashboardSection {
    fn route(self) -> Route {
        match self {
            Self::Overview => Route::Dashboard,
            Self::Profile => Route::DashboardProfile,
            Self::Orders => Route::DashboardOrders,
            Self::Security => Route::DashboardSecurity,
            Self::Preferences => Route::DashboardPreferences,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "dashboard.nav.dashboard",
            Self::Profile => "dashboard.nav.profile",
            Self::Orders => "dashboard.nav.orders",
            Self::Security => "dashboard.nav.security",
            Self::Preferences => "dashboard.nav.preferences",
        }
    }

    fn all() -> [Self; 5] {
        [
            Self::Overview,
            Self::Profile,
            Self::Orders,
            Self::Security,
            Self::Preferences,
        ]
    }
}

#[derive(Properties, PartialEq)]
pub struct DashboardShellProps {
    pub section: DashboardSection,
}

/// Sidebar-plus-content shell shared by all dashboard screens. Always rendered
/// behind the session guard, so an identity is present here.
#[function_component(DashboardShell)]
pub fn dashboard_shell(props: &DashboardShellProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let navigator = use_navigator();

    let greeting = session
        .user()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.logout();
            if let Some(navigator) = navigator.clone() {
                navigator.push(&Route::Home);
            }
        })
    };

    let content = match props.section {
        DashboardSection::Overview => html! { <OverviewPane /> },
        DashboardSection::Profile => html! { <ProfilePane /> },
        DashboardSection::Orders => html! { <OrdersPane /> },
        DashboardSection::Security => html! { <SecurityPane /> },
        DashboardSection::Preferences => html! { <PreferencesPane /> },
    };

    html! {
        <div class="flex min-h-screen bg-base-200/40">
            <aside class="w-64 bg-base-100 border-r border-base-300 p-4 hidden md:flex flex-col">
                <Link<Route> to={Route::Home} classes="text-xl font-bold mb-2">
                    { "SkillsHub" }
                </Link<Route>>
                <p class="text-sm opacity-70 mb-6">
                    { format!("{} {}", i18n.t("dashboard.welcome"), greeting) }
                </p>
                <ul class="menu gap-1 flex-1">
                    { for DashboardSection::all().into_iter().map(|section| html! {
                        <li>
                            <Link<Route>
                                to={section.route()}
                                classes={if section == props.section { "active" } else { "" }}>
                                { i18n.t(section.label_key()) }
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
                <button class="btn btn-ghost btn-sm text-error" onclick={on_logout}>
                    { i18n.t("nav.logout") }
                </button>
            </aside>
            <main class="flex-1 p-6">
                <div class="max-w-5xl mx-auto">{ content }</div>
            </main>
        </div>
    }
}
