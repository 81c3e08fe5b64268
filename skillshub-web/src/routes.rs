use strum::EnumIter;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::guard::Guard;
use crate::containers::layout::Layout;
use crate::i18n::Locale;
use crate::pages::admin::{AdminSection, AdminShell};
use crate::pages::dashboard::{DashboardSection, DashboardShell};
use crate::pages::*;

/// The app routes. Public screens additionally exist under a `/zh` prefix;
/// non-localized screens (auth, dashboard, admin) are canonical-only.
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/zh")]
    ZhHome,
    #[at("/skills")]
    Skills,
    #[at("/zh/skills")]
    ZhSkills,
    #[at("/skills/:id")]
    SkillDetail { id: String },
    #[at("/zh/skills/:id")]
    ZhSkillDetail { id: String },
    #[at("/categories")]
    Categories,
    #[at("/zh/categories")]
    ZhCategories,
    #[at("/login")]
    Login,
    #[at("/auth/callback")]
    AuthCallback,
    #[at("/mock-pay")]
    MockPay,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/profile")]
    DashboardProfile,
    #[at("/dashboard/orders")]
    DashboardOrders,
    #[at("/dashboard/security")]
    DashboardSecurity,
    #[at("/dashboard/preferences")]
    DashboardPreferences,
    #[at("/admin")]
    Admin,
    #[at("/admin/skills")]
    AdminSkills,
    #[at("/admin/users")]
    AdminUsers,
    #[at("/admin/orders")]
    AdminOrders,
    #[at("/admin/settings")]
    AdminSettings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Home screen for a locale, used after login and logout.
    #[must_use]
    pub fn home(locale: Locale) -> Self {
        match locale {
            Locale::Zh => Self::ZhHome,
            Locale::En => Self::Home,
        }
    }

    /// Skills listing for a locale.
    #[must_use]
    pub fn skills(locale: Locale) -> Self {
        match locale {
            Locale::Zh => Self::ZhSkills,
            Locale::En => Self::Skills,
        }
    }

    /// Detail screen for a skill in a locale.
    #[must_use]
    pub fn skill_detail(locale: Locale, id: String) -> Self {
        match locale {
            Locale::Zh => Self::ZhSkillDetail { id },
            Locale::En => Self::SkillDetail { id },
        }
    }
}

fn page(content: Html) -> Html {
    html! { <Layout>{ content }</Layout> }
}

fn dashboard(section: DashboardSection) -> Html {
    html! {
        <Guard>
            <DashboardShell {section} />
        </Guard>
    }
}

fn admin(section: AdminSection) -> Html {
    html! {
        <Guard require_admin=true>
            <AdminShell {section} />
        </Guard>
    }
}

/// Switch function for the app routes.
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home | Route::ZhHome => page(html! { <HomePage /> }),
        Route::Skills | Route::ZhSkills => page(html! { <SkillsPage /> }),
        Route::SkillDetail { id } | Route::ZhSkillDetail { id } => {
            page(html! { <SkillDetailPage {id} /> })
        }
        Route::Categories | Route::ZhCategories => page(html! { <CategoriesPage /> }),
        Route::Login => html! { <LoginPage /> },
        Route::AuthCallback => html! { <AuthCallbackPage /> },
        Route::MockPay => page(html! { <MockPayPage /> }),
        Route::Dashboard => dashboard(DashboardSection::Overview),
        Route::DashboardProfile => dashboard(DashboardSection::Profile),
        Route::DashboardOrders => dashboard(DashboardSection::Orders),
        Route::DashboardSecurity => dashboard(DashboardSection::Security),
        Route::DashboardPreferences => dashboard(DashboardSection::Preferences),
        Route::Admin => admin(AdminSection::Overview),
        Route::AdminSkills => admin(AdminSection::Skills),
        Route::AdminUsers => admin(AdminSection::Users),
        Route::AdminOrders => admin(AdminSection::Orders),
        Route::AdminSettings => admin(AdminSection::Settings),
        Route::NotFound => page(html! { <ErrorPage /> }),
    }
}
