use i18nrs::yew::use_translation;
use skillshub_shared::models::{Order, Page};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;
use crate::components::pagination::Pagination;
use crate::pages::dashboard::{status_badge, status_key};

const PAGE_SIZE: u32 = 20;

#[function_component(AdminOrdersPane)]
pub fn admin_orders_pane() -> Html {
    let (i18n, ..) = use_translation();
    let result = use_state(|| None::<Page<Order>>);
    let page = use_state(|| 1u32);

    {
        let result = result.clone();
        use_effect_with(*page, move |page| {
            let page = *page;
            spawn_local(async move {
                match SkillsHubClient::shared().admin_orders(page, PAGE_SIZE).await {
                    Ok(orders) => result.set(Some(orders)),
                    Err(_) => result.set(Some(Page::default())),
                }
            });
            || ()
        });
    }

    let Some(orders) = (*result).clone() else {
        return html! { <Loading /> };
    };

    let on_page = {
        let page = page.clone();
        Callback::from(move |next: u32| page.set(next))
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{ i18n.t("admin.ordersManagement") }</h1>
                <p class="opacity-70 mb-2">{ i18n.t("admin.ordersManagementDesc") }</p>

                if orders.is_empty() {
                    <p class="py-8 text-center opacity-60">{ i18n.t("admin.noOrders") }</p>
                } else {
                    <div class="overflow-x-auto">
                        <table class="table table-sm">
                            <thead>
                                <tr>
                                    <th>{ i18n.t("orders.orderNo") }</th>
                                    <th>{ i18n.t("common.user") }</th>
                                    <th>{ i18n.t("orders.amount") }</th>
                                    <th>{ i18n.t("orders.status") }</th>
                                    <th>{ i18n.t("orders.createdAt") }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for orders.items.iter().map(|order| {
                                    let created = order
                                        .created_at
                                        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                                        .unwrap_or_default();
                                    html! {
                                        <tr>
                                            <td class="font-mono text-sm">{ &order.order_no }</td>
                                            <td class="font-mono text-xs opacity-70">{ order.user_id.to_string() }</td>
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
                    <Pagination page={*page} page_count={orders.page_count()} on_change={on_page} />
                }
            </div>
        </div>
    }
}
