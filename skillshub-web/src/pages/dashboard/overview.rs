use i18nrs::yew::use_translation;
use skillshub_shared::models::UserDashboardStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;
use crate::routes::Route;
use crate::session::use_session;

#[function_component(OverviewPane)]
pub fn overview_pane() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let stats = use_state(|| None::<UserDashboardStats>);

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match SkillsHubClient::shared().dashboard_stats().await {
                    Ok(fetched) => stats.set(Some(fetched)),
                    Err(_) => stats.set(Some(UserDashboardStats::default())),
                }
            });
            || ()
        });
    }

    let Some(stats) = (*stats).clone() else {
        return html! { <Loading /> };
    };

    let name = session
        .user()
        .map(|user| user.display_name().to_string())
        .unwrap_or_default();

    html! {
        <>
            <div class="mb-6">
                <h1 class="text-2xl font-bold">
                    { format!("{} {}", i18n.t("dashboard.welcome"), name) }
                </h1>
                <p class="opacity-70">{ i18n.t("dashboard.subtitle") }</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-title">{ i18n.t("dashboard.stats.totalOrders") }</div>
                    <div class="stat-value text-primary">{ stats.total_orders }</div>
                    <div class="stat-desc">{ i18n.t("dashboard.stats.ordersDesc") }</div>
                </div>
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-title">{ i18n.t("dashboard.stats.totalSkills") }</div>
                    <div class="stat-value text-secondary">{ stats.total_skills }</div>
                    <div class="stat-desc">{ i18n.t("dashboard.stats.skillsDesc") }</div>
                </div>
                <div class="stat bg-base-100 rounded-box shadow">
                    <div class="stat-title">{ i18n.t("dashboard.stats.totalDownloads") }</div>
                    <div class="stat-value text-accent">{ stats.total_downloads }</div>
                    <div class="stat-desc">{ i18n.t("dashboard.stats.downloadsDesc") }</div>
                </div>
            </div>

            <div class="card bg-base-100 shadow mb-8">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("dashboard.quickActions.title") }</h2>
                    <p class="opacity-70">{ i18n.t("dashboard.quickActions.description") }</p>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mt-2">
                        <Link<Route> to={Route::Skills} classes="card bg-base-200 hover:bg-base-300 transition-colors">
                            <div class="card-body py-4">
                                <h3 class="font-semibold">{ i18n.t("dashboard.quickActions.browseSkills") }</h3>
                                <p class="text-sm opacity-70">{ i18n.t("dashboard.quickActions.browseSkillsDesc") }</p>
                            </div>
                        </Link<Route>>
                        <Link<Route> to={Route::DashboardOrders} classes="card bg-base-200 hover:bg-base-300 transition-colors">
                            <div class="card-body py-4">
                                <h3 class="font-semibold">{ i18n.t("dashboard.quickActions.purchaseHistory") }</h3>
                                <p class="text-sm opacity-70">{ i18n.t("dashboard.quickActions.purchaseHistoryDesc") }</p>
                            </div>
                        </Link<Route>>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("dashboard.recentActivity.title") }</h2>
                    if stats.recent_activity.is_empty() {
                        <p class="opacity-60">{ i18n.t("dashboard.recentActivity.description") }</p>
                    } else {
                        <ul class="divide-y divide-base-200">
                            { for stats.recent_activity.iter().map(|item| html! {
                                <li class="py-2">
                                    <span class="font-medium">{ &item.title }</span>
                                    <span class="text-sm opacity-60 ml-2">{ &item.description }</span>
                                </li>
                            }) }
                        </ul>
                    }
                </div>
            </div>
        </>
    }
}
