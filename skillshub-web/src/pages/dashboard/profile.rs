use i18nrs::yew::use_translation;
use skillshub_shared::models::ProfileUpdate;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::SkillsHubClient;
use crate::session::use_session;

fn text_field(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}

fn non_empty(value: &UseStateHandle<String>) -> Option<String> {
    let value = (**value).trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[function_component(ProfilePane)]
pub fn profile_pane() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();

    let user = session.user().cloned();
    let name = use_state(|| {
        user.as_ref()
            .and_then(|user| user.name.clone())
            .unwrap_or_default()
    });
    let username = use_state(|| {
        user.as_ref()
            .and_then(|user| user.username.clone())
            .unwrap_or_default()
    });
    let bio = use_state(String::new);
    let website = use_state(String::new);
    let location = use_state(String::new);
    let notice = use_state(|| None::<Result<(), ()>>);
    let saving = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let username = username.clone();
        let bio = bio.clone();
        let website = website.clone();
        let location = location.clone();
        let notice = notice.clone();
        let saving = saving.clone();
        let session = session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *saving {
                return;
            }
            let payload = ProfileUpdate {
                name: non_empty(&name),
                username: non_empty(&username),
                bio: non_empty(&bio),
                website: non_empty(&website),
                location: non_empty(&location),
                ..ProfileUpdate::default()
            };
            let notice = notice.clone();
            let saving = saving.clone();
            let session = session.clone();
            saving.set(true);
            spawn_local(async move {
                match SkillsHubClient::shared().update_profile(&payload).await {
                    Ok(_) => {
                        notice.set(Some(Ok(())));
                        // Picks up the new identity server-side.
                        session.refresh();
                    }
                    Err(_) => notice.set(Some(Err(()))),
                }
                saving.set(false);
            });
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h1 class="card-title text-2xl">{ i18n.t("profile.title") }</h1>
                <p class="opacity-70 mb-4">{ i18n.t("profile.subtitle") }</p>

                { match *notice {
                    Some(Ok(())) => html! {
                        <div class="alert alert-success mb-4">{ i18n.t("profile.saved") }</div>
                    },
                    Some(Err(())) => html! {
                        <div class="alert alert-error mb-4">{ i18n.t("profile.saveFailed") }</div>
                    },
                    None => html! {},
                } }

                <form onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    <label class="form-control">
                        <span class="label-text mb-1">{ i18n.t("common.email") }</span>
                        <input
                            type="email"
                            class="input input-bordered"
                            value={user.as_ref().map(|user| user.email.clone()).unwrap_or_default()}
                            disabled=true
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{ i18n.t("profile.name") }</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={(*name).clone()}
                            oninput={text_field(&name)}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{ i18n.t("profile.username") }</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={(*username).clone()}
                            oninput={text_field(&username)}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{ i18n.t("profile.location") }</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={(*location).clone()}
                            oninput={text_field(&location)}
                        />
                    </label>
                    <label class="form-control">
                        <span class="label-text mb-1">{ i18n.t("profile.website") }</span>
                        <input
                            type="url"
                            class="input input-bordered"
                            value={(*website).clone()}
                            oninput={text_field(&website)}
                        />
                    </label>
                    <label class="form-control md:col-span-2">
                        <span class="label-text mb-1">{ i18n.t("profile.bio") }</span>
                        <input
                            type="text"
                            class="input input-bordered"
                            value={(*bio).clone()}
                            oninput={text_field(&bio)}
                        />
                    </label>
                    <div class="md:col-span-2">
                        <button type="submit" class="btn btn-primary" disabled={*saving}>
                            { i18n.t("profile.save") }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
