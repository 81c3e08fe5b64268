mod orders;
mod overview;
mod settings;
mod skills;
mod users;

use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::Route;
use crate::session::use_session;
use orders::AdminOrdersPane;
use overview::AdminOverviewPane;
use settings::AdminSettingsPane;
use skills::AdminSkillsPane;
use users::AdminUsersPane;

/// The admin console screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminSection {
    Overview,
    Skills,
    Users,
    Orders,
    Settings,
}

impl AdminSection {
    fn route(self) -> Route {
        match self {
            Self::Overview => Route::Admin,
            Self::Skills => Route::AdminSkills,
            Self::Users => Route::AdminUsers,
            Self::Orders => Route::AdminOrders,
            Self::Settings => Route::AdminSettings,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            Self::Overview => "admin.overview",
            Self::Skills => "admin.skillsManagement",
            Self::Users => "admin.usersManagement",
            Self::Orders => "admin.ordersManagement",
            Self::Settings => "admin.settings",
        }
    }

    fn all() -> [Self; 5] {
        [
            Self::Overview,
            Self::Skills,
            Self::Users,
            Self::Orders,
            Self::Settings,
        ]
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminShellProps {
    pub section: AdminSection,
}

/// Sidebar shell for the admin console. Rendered behind the admin-only guard,
/// so the current user is always an administrator here.
#[function_component(AdminShell)]
pub fn admin_shell(props: &AdminShellProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();

    let name = session
        .user()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    let content = match props.section {
        AdminSection::Overview => html! { <AdminOverviewPane /> },
        AdminSection::Skills => html! { <AdminSkillsPane /> },
        AdminSection::Users => html! { <AdminUsersPane /> },
        AdminSection::Orders => html! { <AdminOrdersPane /> },
        AdminSection::Settings => html! { <AdminSettingsPane /> },
    };

    html! {
        <div class="flex min-h-screen bg-base-200/40">
            <aside class="w-64 bg-base-100 border-r border-base-300 p-4 hidden md:flex flex-col">
                <Link<Route> to={Route::Home} classes="text-xl font-bold mb-2">
                    { "SkillsHub" }
                </Link<Route>>
                <p class="text-sm opacity-70 mb-6">
                    { format!("{} {}", i18n.t("admin.welcome"), name) }
                </p>
                <ul class="menu gap-1 flex-1">
                    { for AdminSection::all().into_iter().map(|section| html! {
                        <li>
                            <Link<Route>
                                to={section.route()}
                                classes={if section == props.section { "active" } else { "" }}>
                                { i18n.t(section.label_key()) }
                            </Link<Route>>
                        </li>
                    }) }
                </ul>
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost btn-sm">
                    { i18n.t("nav.personalCenter") }
                </Link<Route>>
            </aside>
            <main class="flex-1 p-6">
                <div class="max-w-6xl mx-auto">{ content }</div>
            </main>
        </div>
    }
}
