use i18nrs::yew::use_translation;
use skillshub_shared::models::Preferences;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::components::loading::Loading;

#[function_component(PreferencesPane)]
pub fn preferences_pane() -> Html {
    let (i18n, ..) = use_translation();
    let prefs = use_state(|| None::<Preferences>);
    let notice = use_state(|| None::<Result<(), ()>>);
    let saving = use_state(|| false);

    {
        let prefs = prefs.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match SkillsHubClient::shared().get_preferences().await {
                    Ok(fetched) => prefs.set(Some(fetched)),
                    Err(_) => prefs.set(Some(Preferences::default())),
                }
            });
            || ()
        });
    }

    let Some(current) = (*prefs).clone() else {
        return html! { <Loading /> };
    };

    // Each control rewrites one field and stores the whole struct back.
    let update = {
        let prefs = prefs.clone();
        let current = current.clone();
        move |apply: fn(&mut Preferences, bool)| {
            let prefs = prefs.clone();
            let current = current.clone();
            Callback::from(move |event: Event| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    let mut next = current.clone();
                    apply(&mut next, input.checked());
                    prefs.set(Some(next));
                }
            })
        }
    };

    let on_language = {
        let prefs = prefs.clone();
        let current = current.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                let mut next = current.clone();
                next.language = select.value();
                prefs.set(Some(next));
            }
        })
    };

    let on_save = {
        let current = current.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let payload = current.clone();
            let notice = notice.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                match SkillsHubClient::shared().update_preferences(&payload).await {
                    Ok(_) => notice.set(Some(Ok(()))),
                    Err(_) => notice.set(Some(Err(()))),
                }
                saving.set(false);
            });
        })
    };

    let toggle = |label_key: &'static str, checked: bool, onchange: Callback<Event>| {
        html! {
            <label class="label cursor-pointer justify-start gap-3">
                <input type="checkbox" class="toggle toggle-primary" {checked} {onchange} />
                <span class="label-text">{ i18n.t(label_key) }</span>
            </label>
        }
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{ i18n.t("preferences.title") }</h1>
                <p class="opacity-70 mb-4">{ i18n.t("preferences.subtitle") }</p>

                { match *notice {
                    Some(Ok(())) => html! {
                        <div class="alert alert-success mb-4">{ i18n.t("preferences.saved") }</div>
                    },
                    Some(Err(())) => html! {
                        <div class="alert alert-error mb-4">{ i18n.t("preferences.saveFailed") }</div>
                    },
                    None => html! {},
                } }

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <div>
                        <h2 class="font-semibold mb-2">{ i18n.t("preferences.language") }</h2>
                        <select class="select select-bordered w-full" onchange={on_language}>
                            <option value="zh" selected={current.language == "zh"}>{ "中文" }</option>
                            <option value="en" selected={current.language == "en"}>{ "English" }</option>
                        </select>
                    </div>

                    <div>
                        <h2 class="font-semibold mb-2">{ i18n.t("preferences.notifications") }</h2>
                        { toggle("preferences.notifyEmail", current.notifications.email,
                            update(|prefs, value| prefs.notifications.email = value)) }
                        { toggle("preferences.notifyInApp", current.notifications.in_app,
                            update(|prefs, value| prefs.notifications.in_app = value)) }
                        { toggle("preferences.notifyMarketing", current.notifications.marketing,
                            update(|prefs, value| prefs.notifications.marketing = value)) }
                    </div>

                    <div>
                        <h2 class="font-semibold mb-2">{ i18n.t("preferences.privacy") }</h2>
                        { toggle("preferences.profilePublic", current.privacy.profile_public,
                            update(|prefs, value| prefs.privacy.profile_public = value)) }
                        { toggle("preferences.analyticsOptIn", current.privacy.analytics_opt_in,
                            update(|prefs, value| prefs.privacy.analytics_opt_in = value)) }
                    </div>

                    <div>
                        <h2 class="font-semibold mb-2">{ i18n.t("preferences.search") }</h2>
                        { toggle("preferences.saveHistory", current.search.save_history,
                            update(|prefs, value| prefs.search.save_history = value)) }
                        { toggle("preferences.personalized", current.search.personalized,
                            update(|prefs, value| prefs.search.personalized = value)) }
                    </div>
                </div>

                <div class="mt-6">
                    <button class="btn btn-primary" onclick={on_save} disabled={*saving}>
                        { i18n.t("preferences.save") }
                    </button>
                </div>
            </div>
        </div>
    }
}
