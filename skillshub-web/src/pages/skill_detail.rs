use i18nrs::yew::use_translation;
use skillshub_shared::models::Skill;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;
use crate::routes::Route;
use crate::session::use_session;
use yew_router::hooks::use_navigator;

#[derive(Properties, PartialEq)]
pub struct SkillDetailProps {
    pub id: String,
}

/// Detail screen with the purchase flow: free skills download directly, paid
/// skills create an order and hand off to the payment gateway URL.
#[function_component(SkillDetailPage)]
pub fn skill_detail_page(props: &SkillDetailProps) -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let navigator = use_navigator();
    let skill = use_state(|| None::<Skill>);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);

    {
        let skill = skill.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                if let Ok(found) = SkillsHubClient::shared().skill(&id).await {
                    skill.set(Some(found));
                }
            });
            || ()
        });
    }

    let on_acquire = {
        let skill_state = skill.clone();
        let error = error.clone();
        let busy = busy.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        Callback::from(move |_| {
            let Some(skill) = (*skill_state).clone() else {
                return;
            };
            if !session.is_authenticated() {
                if let Some(navigator) = navigator.clone() {
                    navigator.push(&Route::Login);
                }
                return;
            }
            busy.set(true);
            error.set(None);
            let error = error.clone();
            let busy = busy.clone();
            spawn_local(async move {
                let client = SkillsHubClient::shared();
                let outcome = if skill.is_free() {
                    match client.download_skill(&skill.id.to_string()).await {
                        Ok(download) => {
                            if let (Some(url), Some(window)) =
                                (download.download_url, web_sys::window())
                            {
                                let _ = window.location().set_href(&url);
                            }
                            Ok(())
                        }
                        Err(err) => Err(err),
                    }
                } else {
                    match client.create_order(&skill.id.to_string()).await {
                        Ok(order) => match client.payment_url(&order.id.to_string()).await {
                            Ok(payment) => {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().set_href(&payment.payment_url);
                                }
                                Ok(())
                            }
                            Err(err) => Err(err),
                        },
                        Err(err) => Err(err),
                    }
                };
                if let Err(err) = outcome {
                    error.set(Some(err.to_string()));
                }
                busy.set(false);
            });
        })
    };

    let Some(skill) = (*skill).clone() else {
        return html! { <Loading /> };
    };

    let action_label = if skill.is_free() {
        i18n.t("home.getStart")
    } else {
        i18n.t("home.buy")
    };
    let price = if skill.is_free() {
        i18n.t("home.free")
    } else {
        format!("¥{:.2}", skill.price)
    };

    html! {
        <div class="max-w-4xl mx-auto px-4 py-8">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h1 class="card-title text-3xl">{ &skill.name }</h1>
                    <p class="opacity-80">{ &skill.description }</p>
                    <div class="flex flex-wrap gap-2 my-2">
                        { for skill.tags.iter().map(|tag| html! {
                            <span class="badge badge-outline">{ &tag.name }</span>
                        }) }
                    </div>
                    <div class="stats shadow my-4">
                        <div class="stat">
                            <div class="stat-title">{ i18n.t("stats.downloads") }</div>
                            <div class="stat-value text-lg">{ skill.downloads_count }</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">{ i18n.t("stats.rating") }</div>
                            <div class="stat-value text-lg">{ format!("{:.1}", skill.rating) }</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">{ "GitHub ⭐" }</div>
                            <div class="stat-value text-lg">{ skill.stars_count }</div>
                        </div>
                    </div>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{ message.clone() }</span>
                        </div>
                    }
                    <div class="card-actions items-center justify-between">
                        <span class="text-2xl font-bold text-primary">{ price }</span>
                        <button class="btn btn-primary" onclick={on_acquire} disabled={*busy}>
                            { if *busy { i18n.t("auth.processing") } else { action_label } }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
