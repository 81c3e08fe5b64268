use i18nrs::yew::use_translation;
use skillshub_shared::models::{Page, User};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;
use crate::components::pagination::Pagination;

const PAGE_SIZE: u32 = 20;

#[function_component(AdminUsersPane)]
pub fn admin_users_pane() -> Html {
    let (i18n, ..) = use_translation();
    let result = use_state(|| None::<Page<User>>);
    let page = use_state(|| 1u32);
    let filter = use_state(String::new);
    let sort_by_email = use_state(|| false);

    {
        let result = result.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            spawn_local(async move {
                match SkillsHubClient::shared().admin_users(page, PAGE_SIZE).await {
                    Ok(users) => result.set(Some(users)),
                    Err(_) => result.set(Some(Page::default())),
                }
            });
            || ()
        });
    }

    let Some(users) = (*result).clone() else {
        return html! { <Loading /> };
    };

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                filter.set(input.value().to_lowercase());
            }
        })
    };
    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let on_sort = {
        let sort_by_email = sort_by_email.clone();
        Callback::from(move |_| sort_by_email.set(!*sort_by_email))
    };

    let mut visible: Vec<&User> = users
        .items
        .iter()
        .filter(|user| {
            filter.is_empty()
                || user.email.to_lowercase().contains(&*filter)
                || user.display_name().to_lowercase().contains(&*filter)
        })
        .collect();
    if *sort_by_email {
        visible.sort_by(|a, b| a.email.cmp(&b.email));
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{ i18n.t("admin.usersManagement") }</h1>
                <p class="opacity-70 mb-2">{ i18n.t("admin.usersManagementDesc") }</p>

                <input
                    type="text"
                    class="input input-bordered w-full max-w-xs mb-4"
                    placeholder={i18n.t("common.search")}
                    oninput={on_filter}
                />

                <div class="overflow-x-auto">
                    <table class="table table-sm">
                        <thead>
                            <tr>
                                <th>{ i18n.t("common.user") }</th>
                                <th class="cursor-pointer select-none" onclick={on_sort}>
                                    { i18n.t("common.email") }
                                    { if *sort_by_email { " ↑" } else { "" } }
                                </th>
                                <th>{ i18n.t("common.role") }</th>
                                <th>{ i18n.t("orders.status") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|user| html! {
                                <tr>
                                    <td class="font-medium">{ user.display_name() }</td>
                                    <td>{ &user.email }</td>
                                    <td>
                                        if user.is_admin() {
                                            <span class="badge badge-primary">{ "admin" }</span>
                                        } else {
                                            <span class="badge badge-ghost">{ "user" }</span>
                                        }
                                    </td>
                                    <td>
                                        if user.is_active {
                                            <span class="badge badge-success badge-outline">{ i18n.t("common.active") }</span>
                                        } else {
                                            <span class="badge badge-ghost">{ i18n.t("common.inactive") }</span>
                                        }
                                    </td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
                <Pagination page={*page} page_count={users.page_count()} on_change={on_page} />
            </div>
        </div>
    }
}
