use i18nrs::yew::use_translation;
use skillshub_shared::models::{Category, Skill};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_location;
use yew_router::prelude::Link;

use crate::api::SkillsHubClient;
use crate::components::skill_card::SkillCard;
use crate::i18n::Locale;
use crate::routes::Route;

const RAIL_LIMIT: u32 = 6;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (i18n, ..) = use_translation();
    let locale = use_location()
        .map(|location| Locale::of_path(location.path()))
        .unwrap_or_default();
    let hot = use_state(Vec::<Skill>::new);
    let trending = use_state(Vec::<Skill>::new);
    let categories = use_state(Vec::<Category>::new);

    {
        let hot = hot.clone();
        let trending = trending.clone();
        let categories = categories.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let client = SkillsHubClient::shared();
                if let Ok(skills) = client.hot_skills(RAIL_LIMIT).await {
                    hot.set(skills);
                }
                if let Ok(skills) = client.trending_skills(RAIL_LIMIT).await {
                    trending.set(skills);
                }
                if let Ok(list) = client.categories().await {
                    categories.set(list);
                }
            });
            || ()
        });
    }

    let rail = |skills: &[Skill], empty_key: &str| -> Html {
        if skills.is_empty() {
            html! { <p class="opacity-60">{ i18n.t(empty_key) }</p> }
        } else {
            html! {
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for skills.iter().map(|skill| html! {
                        <SkillCard skill={skill.clone()} {locale} />
                    }) }
                </div>
            }
        }
    };

    html! {
        <div class="max-w-6xl mx-auto px-4">
            <section class="hero py-16 text-center">
                <div class="hero-content flex-col">
                    <h1 class="text-5xl font-bold">{ i18n.t("home.heroTitle") }</h1>
                    <p class="py-4 max-w-2xl opacity-80">{ i18n.t("home.heroSubtitle") }</p>
                    <div class="flex gap-3">
                        <Link<Route> to={Route::skills(locale)} classes="btn btn-primary">
                            { i18n.t("home.startBrowsing") }
                        </Link<Route>>
                        <Link<Route> to={if locale == Locale::Zh { Route::ZhCategories } else { Route::Categories }} classes="btn btn-outline">
                            { i18n.t("home.learnMore") }
                        </Link<Route>>
                    </div>
                </div>
            </section>

            if !categories.is_empty() {
                <section class="py-4">
                    <div class="flex flex-wrap gap-2 justify-center">
                        { for categories.iter().map(|category| html! {
                            <Link<Route> to={Route::skills(locale)} classes="badge badge-outline badge-lg hover:badge-primary">
                                { &category.name }
                            </Link<Route>>
                        }) }
                    </div>
                </section>
            }

            <section class="py-8">
                <h2 class="text-2xl font-bold">{ i18n.t("home.hotSkills") }</h2>
                <p class="opacity-70 mb-4">{ i18n.t("home.hotSkillsDesc") }</p>
                { rail(&hot, "home.noHotSkills") }
            </section>

            <section class="py-8">
                <h2 class="text-2xl font-bold">{ i18n.t("home.trendingSkills") }</h2>
                <p class="opacity-70 mb-4">{ i18n.t("home.trendingSkillsDesc") }</p>
                { rail(&trending, "home.noTrendingSkills") }
            </section>

            <section class="py-8">
                <h2 class="text-2xl font-bold text-center">{ i18n.t("home.whyChooseUs") }</h2>
                <p class="opacity-70 text-center mb-6">{ i18n.t("home.whyChooseUsDesc") }</p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    { for ["quickIntegration", "continuousUpdates", "richCategories"].iter().map(|feature| html! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body">
                                <h3 class="card-title">{ i18n.t(&format!("features.{feature}.title")) }</h3>
                                <p class="text-sm opacity-70">{ i18n.t(&format!("features.{feature}.description")) }</p>
                            </div>
                        </div>
                    }) }
                </div>
            </section>

            <section class="py-12 text-center">
                <h2 class="text-3xl font-bold">{ i18n.t("cta.readyToStart") }</h2>
                <p class="opacity-70 py-3 max-w-2xl mx-auto">{ i18n.t("cta.description") }</p>
                <Link<Route> to={Route::Login} classes="btn btn-primary">
                    { i18n.t("cta.createFreeAccount") }
                </Link<Route>>
            </section>
        </div>
    }
}
