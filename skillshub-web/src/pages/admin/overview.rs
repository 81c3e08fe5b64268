use i18nrs::yew::use_translation;
use skillshub_shared::models::AdminOverview;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::pages::dashboard::{status_badge, status_key};
use crate::components::loading::Loading;

#[function_component(AdminOverviewPane)]
pub fn admin_overview_pane() -> Html {
    let (i18n, ..) = use_translation();
    let overview = use_state(|| None::<AdminOverview>);

    {
        let overview = overview.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match SkillsHubClient::shared().admin_overview().await {
                    Ok(fetched) => overview.set(Some(fetched)),
                    Err(_) => overview.set(Some(AdminOverview::default())),
                }
            });
            || ()
        });
    }

    let Some(overview) = (*overview).clone() else {
        return html! { <Loading /> };
    };

    let stat = |title: &'static str, value: String, desc: &'static str| {
        html! {
            <div class="stat bg-base-100 rounded-box shadow">
                <div class="stat-title">{ i18n.t(title) }</div>
                <div class="stat-value text-primary">{ value }</div>
                <div class="stat-desc">{ i18n.t(desc) }</div>
            </div>
        }
    };

    html! {
        <>
            <div class="mb-6">
                <h1 class="text-2xl font-bold">{ i18n.t("admin.dashboardTitle") }</h1>
                <p class="opacity-70">{ i18n.t("admin.subtitle") }</p>
            </div>

            <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                { stat("admin.totalRevenue", format!("¥{:.2}", overview.total_revenue), "admin.overviewDesc") }
                { stat("admin.totalOrders", overview.total_orders.to_string(), "admin.todayOrders") }
                { stat("admin.totalUsers", overview.total_users.to_string(), "admin.activeUsers") }
                { stat("admin.totalSkills", overview.total_skills.to_string(), "admin.hotSkills") }
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("admin.recentOrders") }</h2>
                    <p class="opacity-70">{ i18n.t("admin.recentOrdersDesc") }</p>
                    if overview.recent_orders.is_empty() {
                        <p class="py-6 text-center opacity-60">{ i18n.t("admin.noOrders") }</p>
                    } else {
                        <div class="overflow-x-auto">
                            <table class="table table-sm">
                                <thead>
                                    <tr>
                                        <th>{ i18n.t("orders.orderNo") }</th>
                                        <th>{ i18n.t("orders.amount") }</th>
                                        <th>{ i18n.t("orders.status") }</th>
                                        <th>{ i18n.t("orders.createdAt") }</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    { for overview.recent_orders.iter().map(|order| {
                                        let created = order
                                            .created_at
                                            .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                            .unwrap_or_default();
                                        html! {
                                            <tr>
                                                <td class="font-mono text-sm">{ &order.order_no }</td>
                                                <td>{ format!("¥{:.2}", order.total_amount) }</td>
                                                <td>
                                                    <span class={status_badge(order.status)}>
                                                        { i18n.t(status_key(order.status)) }
                                                    </span>
                                                </td>
                                                <td>{ created }</td>
                                            </tr>
                                        }
                                    }) }
                                </tbody>
                            </table>
                        </div>
                    }
                </div>
            </div>
        </>
    }
}
