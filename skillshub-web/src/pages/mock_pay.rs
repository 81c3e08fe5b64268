use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::SkillsHubClient;
use crate::routes::Route;

/// Stand-in payment gateway used in development: confirms or cancels the
/// order identified by the `order_no` query parameter via the mock callback.
#[function_component(MockPayPage)]
pub fn mock_pay_page() -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let busy = use_state(|| false);
    let error = use_state(|| None::<String>);
    let order_no = use_memo((), |()| query_param("order_no").unwrap_or_default());

    let settle = {
        let busy = busy.clone();
        let error = error.clone();
        let order_no = order_no.clone();
        Callback::from(move |status: &'static str| {
            let busy = busy.clone();
            let error = error.clone();
            let navigator = navigator.clone();
            let order_no = (*order_no).clone();
            busy.set(true);
            spawn_local(async move {
                match SkillsHubClient::shared()
                    .mock_payment_callback(&order_no, status)
                    .await
                {
                    Ok(_) => {
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::DashboardOrders);
                        }
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        })
    };

    let on_success = {
        let settle = settle.clone();
        Callback::from(move |_| settle.emit("TRADE_SUCCESS"))
    };
    let on_cancel = Callback::from(move |_| settle.emit("TRADE_CLOSED"));

    html! {
        <div class="max-w-md mx-auto px-4 py-16">
            <div class="card bg-base-100 shadow">
                <div class="card-body text-center">
                    <h1 class="card-title justify-center">{ "Mock Pay" }</h1>
                    <p class="opacity-70 text-sm">{ format!("Order: {}", &*order_no) }</p>
                    if let Some(message) = &*error {
                        <div class="alert alert-error"><span>{ message.clone() }</span></div>
                    }
                    <div class="flex gap-3 justify-center mt-4">
                        <button class="btn btn-primary" onclick={on_success} disabled={*busy}>
                            { i18n.t("admin.statusPaid") }
                        </button>
                        <button class="btn btn-outline" onclick={on_cancel} disabled={*busy}>
                            { i18n.t("admin.statusPending") }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn query_param(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let query = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&query).ok()?;
    params.get(name)
}
