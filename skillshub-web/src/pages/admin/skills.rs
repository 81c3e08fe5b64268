use i18nrs::yew::use_translation;
use skillshub_shared::models::{Page, Skill};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;
use crate::components::pagination::Pagination;

const PAGE_SIZE: u32 = 20;

#[function_component(AdminSkillsPane)]
pub fn admin_skills_pane() -> Html {
    let (i18n, ..) = use_translation();
    let result = use_state(|| None::<Page<Skill>>);
    let page = use_state(|| 1u32);
    let filter = use_state(String::new);
    let sort_by_downloads = use_state(|| false);

    {
        let result = result.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            spawn_local(async move {
                match SkillsHubClient::shared().admin_skills(page, PAGE_SIZE).await {
                    Ok(skills) => result.set(Some(skills)),
                    Err(_) => result.set(Some(Page::default())),
                }
            });
            || ()
        });
    }

    let Some(skills) = (*result).clone() else {
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
        let sort_by_downloads = sort_by_downloads.clone();
        Callback::from(move |_| sort_by_downloads.set(!*sort_by_downloads))
    };

    // Search and sort narrow and order the loaded page only; paging still
    // goes to the server.
    let mut visible: Vec<&Skill> = skills
        .items
        .iter()
        .filter(|skill| filter.is_empty() || skill.name.to_lowercase().contains(&*filter))
        .collect();
    if *sort_by_downloads {
        visible.sort_by(|a, b| b.downloads_count.cmp(&a.downloads_count));
    } else {
        visible.sort_by(|a, b| a.name.cmp(&b.name));
    }

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{ i18n.t("admin.skillsManagement") }</h1>
                <p class="opacity-70 mb-2">{ i18n.t("admin.skillsManagementDesc") }</p>

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
                                <th>{ i18n.t("profile.name") }</th>
                                <th>{ i18n.t("common.price") }</th>
                                <th class="cursor-pointer select-none" onclick={on_sort}>
                                    { i18n.t("common.downloads") }
                                    { if *sort_by_downloads { " ↓" } else { "" } }
                                </th>
                                <th>{ i18n.t("orders.status") }</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for visible.iter().map(|skill| html! {
                                <tr>
                                    <td>
                                        <div class="font-medium">{ &skill.name }</div>
                                        <div class="text-sm opacity-60 truncate max-w-xs">{ &skill.description }</div>
                                    </td>
                                    <td>
                                        if skill.is_free() {
                                            <span class="badge badge-success">{ i18n.t("common.free") }</span>
                                        } else {
                                            { format!("¥{:.2}", skill.price) }
                                        }
                                    </td>
                                    <td>{ skill.downloads_count }</td>
                                    <td>
                                        if skill.is_active {
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
                <Pagination page={*page} page_count={skills.page_count()} on_change={on_page} />
            </div>
        </div>
    }
}
