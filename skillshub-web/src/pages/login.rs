use i18nrs::yew::use_translation;
use skillshub_shared::models::{LoginRequest, RegisterRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::api::SkillsHubClient;
use crate::i18n::Locale;
use crate::routes::Route;
use crate::session::use_session;

const MIN_PASSWORD_LEN: usize = 6;

/// Combined login/register screen with third-party OAuth entry points.
///
/// Validation happens entirely client-side before any network call; failures
/// surface inline above the form.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let navigator = use_navigator();

    let is_login = use_state(|| true);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let current_locale = i18n
        .get_current_language()
        .parse::<Locale>()
        .unwrap_or_default();

    let onsubmit = {
        let is_login = is_login.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let error = error.clone();
        let loading = loading.clone();
        let session = session.clone();
        let navigator = navigator.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let signing_in = *is_login;

            if !signing_in {
                if password_value.len() < MIN_PASSWORD_LEN {
                    error.set(Some(i18n.t("auth.errorPasswordTooShort")));
                    return;
                }
                if password_value != *confirm {
                    error.set(Some(i18n.t("auth.errorPasswordMismatch")));
                    return;
                }
            }

            loading.set(true);
            error.set(None);
            let error = error.clone();
            let loading = loading.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let failure_message = if signing_in {
                i18n.t("auth.errorLoginFailed")
            } else {
                i18n.t("auth.errorRegisterFailed")
            };
            spawn_local(async move {
                let client = SkillsHubClient::shared();
                let result = if signing_in {
                    client
                        .login(&LoginRequest {
                            email: email_value,
                            password: password_value,
                        })
                        .await
                } else {
                    client
                        .register(&RegisterRequest {
                            email: email_value,
                            password: password_value,
                            name: None,
                        })
                        .await
                };
                match result {
                    Ok(response) => {
                        session.login(response.user, &response.token);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::home(current_locale));
                        }
                    }
                    Err(_) => error.set(Some(failure_message)),
                }
                loading.set(false);
            });
        })
    };

    let oauth = {
        let error = error.clone();
        let oauth_failure = i18n.t("auth.errorGetOAuthUrlFailed");
        Callback::from(move |provider: &'static str| {
            let error = error.clone();
            let oauth_failure = oauth_failure.clone();
            spawn_local(async move {
                match SkillsHubClient::shared().oauth_url(provider).await {
                    Ok(response) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&response.url);
                        }
                    }
                    Err(_) => error.set(Some(oauth_failure)),
                }
            });
        })
    };

    let on_toggle_mode = {
        let is_login = is_login.clone();
        let error = error.clone();
        Callback::from(move |_| {
            is_login.set(!*is_login);
            error.set(None);
        })
    };

    let bind_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let signing_in = *is_login;
    let busy = *loading;
    let submit_label = if busy {
        if signing_in {
            i18n.t("auth.processing")
        } else {
            i18n.t("auth.registerProcessing")
        }
    } else if signing_in {
        i18n.t("auth.login")
    } else {
        i18n.t("auth.register")
    };

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200 px-4">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl justify-center">
                        { if signing_in { i18n.t("auth.loginTitle") } else { i18n.t("auth.registerTitle") } }
                    </h2>
                    <p class="text-center text-sm opacity-70">
                        { if signing_in { i18n.t("auth.loginSubtitle") } else { i18n.t("auth.registerSubtitle") } }
                    </p>

                    <div class="flex flex-col gap-2 my-2">
                        <span class="text-center text-xs opacity-60">{ i18n.t("auth.continueWithThirdParty") }</span>
                        <div class="flex gap-2 justify-center">
                            { for ["github", "google"].into_iter().map(|provider| {
                                let oauth = oauth.clone();
                                html! {
                                    <button
                                        type="button"
                                        class="btn btn-outline btn-sm"
                                        onclick={move |_| oauth.emit(provider)}>
                                        { provider }
                                    </button>
                                }
                            }) }
                        </div>
                        <div class="divider text-xs opacity-60">{ i18n.t("auth.orUseEmail") }</div>
                    </div>

                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{ message.clone() }</span>
                        </div>
                    }

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{ i18n.t("auth.emailAddress") }</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            placeholder={i18n.t("auth.emailPlaceholder")}
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{ i18n.t("auth.password") }</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            placeholder={i18n.t("auth.passwordPlaceholder")}
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                        if !signing_in {
                            <span class="label-text-alt opacity-60">{ i18n.t("auth.passwordMinLength") }</span>
                        }
                    </div>
                    if !signing_in {
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">{ i18n.t("auth.confirmPassword") }</span>
                            </label>
                            <input
                                id="confirm"
                                class="input input-bordered"
                                type="password"
                                required=true
                                placeholder={i18n.t("auth.confirmPasswordPlaceholder")}
                                value={(*confirm).clone()}
                                oninput={bind_input(&confirm)}
                            />
                        </div>
                    }

                    <div class="form-control mt-4">
                        <button class="btn btn-primary" type="submit" disabled={busy}>
                            { submit_label }
                        </button>
                    </div>

                    <div class="text-center text-sm opacity-70 mt-2">
                        { if signing_in { i18n.t("auth.noAccount") } else { i18n.t("auth.hasAccount") } }
                        <a class="link link-primary ml-1" onclick={on_toggle_mode}>
                            { if signing_in { i18n.t("auth.register") } else { i18n.t("auth.login") } }
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
