use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_location;
use yew_router::prelude::Link;

use crate::components::{language_selector::LanguageSelector, user_dropdown::UserDropdown};
use crate::i18n::Locale;
use crate::routes::Route;
use crate::session::use_session;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let locale = use_location()
        .map(|location| Locale::of_path(location.path()))
        .unwrap_or_default();

    let auth_area = if session.is_authenticated() {
        html! { <UserDropdown /> }
    } else {
        html! {
            <Link<Route> to={Route::Login} classes="btn btn-primary btn-sm">
                { i18n.t("nav.login") }
            </Link<Route>>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-100 shadow-sm px-4">
            <Link<Route> to={Route::home(locale)} classes="btn btn-ghost text-lg font-bold">
                { "SkillsHub" }
            </Link<Route>>
            <ul class="hidden menu sm:menu-horizontal">
                <li>
                    <Link<Route> to={Route::skills(locale)}>{ i18n.t("footer.skills") }</Link<Route>>
                </li>
                <li>
                    <Link<Route> to={if locale == Locale::Zh { Route::ZhCategories } else { Route::Categories }}>
                        { i18n.t("footer.categories") }
                    </Link<Route>>
                </li>
            </ul>
            <div class="flex items-center gap-2">
                <LanguageSelector />
                { auth_area }
            </div>
        </nav>
    }
}
