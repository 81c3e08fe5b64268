use i18nrs::yew::use_translation;
use skillshub_shared::models::{Category, Page, Skill};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::hooks::use_location;

use crate::api::{SkillListQuery, SkillsHubClient};
use crate::components::loading::Loading;
use crate::components::pagination::Pagination;
use crate::components::skill_card::SkillCard;
use crate::i18n::Locale;

const PAGE_SIZE: u32 = 12;

#[function_component(SkillsPage)]
pub fn skills_page() -> Html {
    let (i18n, ..) = use_translation();
    let locale = use_location()
        .map(|location| Locale::of_path(location.path()))
        .unwrap_or_default();

    let result = use_state(|| None::<Page<Skill>>);
    let categories = use_state(Vec::<Category>::new);
    let search = use_state(String::new);
    let category_filter = use_state(String::new);
    let page = use_state(|| 1u32);

    {
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(list) = SkillsHubClient::shared().categories().await {
                    categories.set(list);
                }
            });
            || ()
        });
    }

    {
        let result = result.clone();
        let deps = (
            (*page),
            (*search).clone(),
            (*category_filter).clone(),
        );
        use_effect_with(deps, move |(page, search, category_filter)| {
            let query = SkillListQuery {
                page: *page,
                page_size: PAGE_SIZE,
                category_id: (!category_filter.is_empty()).then(|| category_filter.clone()),
                search: (!search.is_empty()).then(|| search.clone()),
            };
            let result = result.clone();
            spawn_local(async move {
                match SkillsHubClient::shared().skills(&query).await {
                    Ok(skills) => result.set(Some(skills)),
                    Err(_) => result.set(Some(Page::default())),
                }
            });
            || ()
        });
    }

    let on_search = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
                page.set(1);
            }
        })
    };

    let on_category = {
        let category_filter = category_filter.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                category_filter.set(select.value());
                page.set(1);
            }
        })
    };

    let on_clear = {
        let search = search.clone();
        let category_filter = category_filter.clone();
        let page = page.clone();
        Callback::from(move |_| {
            search.set(String::new());
            category_filter.set(String::new());
            page.set(1);
        })
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    let body = match &*result {
        None => html! { <Loading /> },
        Some(skills) if skills.is_empty() => html! {
            <p class="text-center opacity-60 py-12">{ i18n.t("home.skillNotFound") }</p>
        },
        Some(skills) => html! {
            <>
                <p class="text-sm opacity-60 mb-3">
                    { i18n.t("home.findSkills").replace("{count}", &skills.total.to_string()) }
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for skills.items.iter().map(|skill| html! {
                        <SkillCard skill={skill.clone()} {locale} />
                    }) }
                </div>
                <Pagination page={skills.page} page_count={skills.page_count()} on_change={on_page} />
            </>
        },
    };

    html! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <div class="flex flex-col sm:flex-row gap-3 mb-6">
                <input
                    class="input input-bordered flex-1"
                    type="search"
                    placeholder={i18n.t("home.searchPlaceholder")}
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <select class="select select-bordered" onchange={on_category} value={(*category_filter).clone()}>
                    <option value="" selected={category_filter.is_empty()}>
                        { i18n.t("home.allCategories") }
                    </option>
                    { for categories.iter().map(|category| html! {
                        <option
                            value={category.id.to_string()}
                            selected={*category_filter == category.id.to_string()}>
                            { &category.name }
                        </option>
                    }) }
                </select>
                <button class="btn btn-ghost" onclick={on_clear}>
                    { i18n.t("home.clearFilter") }
                </button>
            </div>
            { body }
        </div>
    }
}
