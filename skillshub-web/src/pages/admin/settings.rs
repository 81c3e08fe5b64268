use i18nrs::yew::use_translation;
use skillshub_shared::models::PlatformStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;
use crate::config::FrontendConfig;

#[function_component(AdminSettingsPane)]
pub fn admin_settings_pane() -> Html {
    let (i18n, ..) = use_translation();
    let stats = use_state(|| None::<PlatformStats>);

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match SkillsHubClient::shared().platform_stats().await {
                    Ok(fetched) => stats.set(Some(fetched)),
                    Err(_) => stats.set(Some(PlatformStats::default())),
                }
            });
            || ()
        });
    }

    let Some(stats) = (*stats).clone() else {
        return html! { <Loading /> };
    };

    let config = FrontendConfig::new();

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{ i18n.t("admin.settings") }</h1>
                <p class="opacity-70 mb-4">{ i18n.t("admin.settingsDesc") }</p>

                <div class="overflow-x-auto">
                    <table class="table">
                        <tbody>
                            <tr>
                                <th>{ "API" }</th>
                                <td class="font-mono text-sm">{ config.api_base_url }</td>
                            </tr>
                            <tr>
                                <th>{ i18n.t("admin.totalUsers") }</th>
                                <td>{ stats.total_users }</td>
                            </tr>
                            <tr>
                                <th>{ i18n.t("admin.totalSkills") }</th>
                                <td>{ stats.total_skills }</td>
                            </tr>
                            <tr>
                                <th>{ i18n.t("admin.activeUsers") }</th>
                                <td>{ stats.active_users }</td>
                            </tr>
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
