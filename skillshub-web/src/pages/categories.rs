use i18nrs::yew::use_translation;
use skillshub_shared::models::Category;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_location;
use yew_router::prelude::Link;

use crate::api::SkillsHubClient;
use crate::i18n::Locale;
use crate::routes::Route;

#[function_component(CategoriesPage)]
pub fn categories_page() -> Html {
    let (i18n, ..) = use_translation();
    let locale = use_location()
        .map(|location| Locale::of_path(location.path()))
        .unwrap_or_default();
    let categories = use_state(Vec::<Category>::new);

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

    html! {
        <div class="max-w-6xl mx-auto px-4 py-8">
            <div class="text-center mb-10">
                <h1 class="text-4xl font-bold">{ i18n.t("categories.title") }</h1>
                <p class="opacity-70 mt-2 max-w-2xl mx-auto">{ i18n.t("categories.subtitle") }</p>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                { for categories.iter().map(|category| html! {
                    <div class="card bg-base-100 shadow hover:shadow-lg transition-shadow">
                        <div class="card-body">
                            <h2 class="card-title">{ &category.name }</h2>
                            <Link<Route> to={Route::skills(locale)} classes="link link-primary text-sm">
                                { i18n.t("categories.exploreSkills") }
                            </Link<Route>>
                        </div>
                    </div>
                }) }
            </div>
            <div class="text-center py-12">
                <h2 class="text-2xl font-bold">{ i18n.t("categories.readyToFind") }</h2>
                <p class="opacity-70 py-2">{ i18n.t("categories.readyToFindDesc") }</p>
                <Link<Route> to={Route::skills(locale)} classes="btn btn-primary">
                    { i18n.t("categories.browseAll") }
                </Link<Route>>
            </div>
        </div>
    }
}
