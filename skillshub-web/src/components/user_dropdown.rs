use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::routes::Route;
use crate::session::use_session;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let navigator = use_navigator().unwrap();
    let (i18n, ..) = use_translation();
    let session = use_session();
    let Some(user) = session.user().cloned() else {
        return html! {};
    };

    let dashboard_button = {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigator.push(&Route::Dashboard);
        });
        html! {
            <li><a {onclick}>{ i18n.t("nav.personalCenter") }</a></li>
        }
    };

    let admin_button = if user.is_admin() {
        let navigator = navigator.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            navigator.push(&Route::Admin);
        });
        html! {
            <li><a {onclick}>{ i18n.t("nav.adminDashboard") }</a></li>
        }
    } else {
        html! {}
    };

    let logout_button = {
        let session = session.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            session.logout();
            navigator.push(&Route::Home);
        });
        html! {
            <li><a {onclick}>{ i18n.t("nav.logout") }</a></li>
        }
    };

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle">
                <span class="font-semibold">{ user.display_name().chars().next().unwrap_or('?') }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold">{ user.display_name() }</div>
                    <div class="text-xs opacity-70">{ &user.email }</div>
                </li>
                <div class="divider my-0"></div>
                { dashboard_button }
                { admin_button }
                <div class="divider my-0"></div>
                { logout_button }
            </ul>
        </div>
    }
}
