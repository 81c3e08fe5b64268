use i18nrs::yew::use_translation;
use skillshub_shared::models::{ChangePasswordRequest, OAuthAccount};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::SkillsHubClient;

const MIN_PASSWORD_LEN: usize = 6;

#[derive(Clone, Copy)]
enum Notice {
    Changed,
    Mismatch,
    TooShort,
    Failed,
}

#[function_component(SecurityPane)]
pub fn security_pane() -> Html {
    let (i18n, ..) = use_translation();
    let current = use_state(String::new);
    let fresh = use_state(String::new);
    let confirm = use_state(String::new);
    let notice = use_state(|| None::<Notice>);
    let busy = use_state(|| false);
    let accounts = use_state(Vec::<OAuthAccount>::new);

    {
        let accounts = accounts.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Ok(list) = SkillsHubClient::shared().oauth_accounts().await {
                    accounts.set(list);
                }
            });
            || ()
        });
    }

    let field = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_submit = {
        let current = current.clone();
        let fresh = fresh.clone();
        let confirm = confirm.clone();
        let notice = notice.clone();
        let busy = busy.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *busy {
                return;
            }
            if fresh.len() < MIN_PASSWORD_LEN {
                notice.set(Some(Notice::TooShort));
                return;
            }
            if *fresh != *confirm {
                notice.set(Some(Notice::Mismatch));
                return;
            }
            let payload = ChangePasswordRequest {
                current_password: (*current).clone(),
                new_password: (*fresh).clone(),
            };
            let current = current.clone();
            let fresh = fresh.clone();
            let confirm = confirm.clone();
            let notice = notice.clone();
            let busy = busy.clone();
            busy.set(true);
            spawn_local(async move {
                match SkillsHubClient::shared().change_password(&payload).await {
                    Ok(_) => {
                        notice.set(Some(Notice::Changed));
                        current.set(String::new());
                        fresh.set(String::new());
                        confirm.set(String::new());
                    }
                    Err(_) => notice.set(Some(Notice::Failed)),
                }
                busy.set(false);
            });
        })
    };

    let on_unbind = {
        let accounts = accounts.clone();
        Callback::from(move |provider: String| {
            let accounts = accounts.clone();
            spawn_local(async move {
                if SkillsHubClient::shared()
                    .unbind_oauth_account(&provider)
                    .await
                    .is_ok()
                {
                    let remaining = accounts
                        .iter()
                        .filter(|account| account.provider != provider)
                        .cloned()
                        .collect();
                    accounts.set(remaining);
                }
            });
        })
    };

    let notice_view = match *notice {
        Some(Notice::Changed) => {
            html! { <div class="alert alert-success mb-4">{ i18n.t("security.passwordChanged") }</div> }
        }
        Some(Notice::Mismatch) => {
            html! { <div class="alert alert-error mb-4">{ i18n.t("security.passwordMismatch") }</div> }
        }
        Some(Notice::TooShort) => {
            html! { <div class="alert alert-error mb-4">{ i18n.t("auth.errorPasswordTooShort") }</div> }
        }
        Some(Notice::Failed) => {
            html! { <div class="alert alert-error mb-4">{ i18n.t("common.error") }</div> }
        }
        None => html! {},
    };

    html! {
        <>
            <div class="card bg-base-100 shadow mb-6">
                <div class="card-body">
                    <h1 class="card-title text-2xl">{ i18n.t("security.title") }</h1>
                    <p class="opacity-70 mb-2">{ i18n.t("security.subtitle") }</p>

                    { notice_view }

                    <h2 class="font-semibold">{ i18n.t("security.changePassword") }</h2>
                    <form onsubmit={on_submit} class="grid grid-cols-1 md:grid-cols-3 gap-4 mt-2">
                        <label class="form-control">
                            <span class="label-text mb-1">{ i18n.t("security.currentPassword") }</span>
                            <input
                                type="password"
                                class="input input-bordered"
                                value={(*current).clone()}
                                oninput={field(&current)}
                                required=true
                            />
                        </label>
                        <label class="form-control">
                            <span class="label-text mb-1">{ i18n.t("security.newPassword") }</span>
                            <input
                                type="password"
                                class="input input-bordered"
                                value={(*fresh).clone()}
                                oninput={field(&fresh)}
                                required=true
                            />
                        </label>
                        <label class="form-control">
                            <span class="label-text mb-1">{ i18n.t("security.confirmNewPassword") }</span>
                            <input
                                type="password"
                                class="input input-bordered"
                                value={(*confirm).clone()}
                                oninput={field(&confirm)}
                                required=true
                            />
                        </label>
                        <div class="md:col-span-3">
                            <button type="submit" class="btn btn-primary" disabled={*busy}>
                                { i18n.t("security.submit") }
                            </button>
                        </div>
                    </form>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("security.oauthAccounts") }</h2>
                    <p class="opacity-70">{ i18n.t("security.oauthAccountsDesc") }</p>
                    if accounts.is_empty() {
                        <p class="py-4 opacity-60">{ i18n.t("security.noOauthAccounts") }</p>
                    } else {
                        <ul class="divide-y divide-base-200">
                            { for accounts.iter().map(|account| {
                                let provider = account.provider.clone();
                                let on_unbind = on_unbind.clone();
                                html! {
                                    <li class="py-3 flex items-center justify-between">
                                        <span class="font-medium capitalize">{ &account.provider }</span>
                                        <button
                                            class="btn btn-outline btn-error btn-xs"
                                            onclick={Callback::from(move |_| on_unbind.emit(provider.clone()))}>
                                            { i18n.t("security.unbind") }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                </div>
            </div>
        </>
    }
}
