use i18nrs::yew::use_translation;
use skillshub_shared::models::User;
use yew::prelude::*;
use yew_router::hooks::use_navigator;

use crate::routes::Route;
use crate::session::use_session;

/// OAuth landing screen. The provider redirect carries `token` and a
/// URL-encoded `user` JSON blob in the query string; both must be present and
/// parseable or the visitor is bounced back to login.
#[function_component(AuthCallbackPage)]
pub fn auth_callback_page() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let navigator = use_navigator();

    use_effect_with((), move |_| {
        let outcome = callback_credentials().and_then(|(token, raw_user)| {
            serde_json::from_str::<User>(&raw_user)
                .ok()
                .map(|user| (user, token))
        });
        match outcome {
            Some((user, token)) => {
                session.login(user, &token);
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Home);
                }
            }
            None => {
                web_sys::console::error_1(&"oauth callback missing or malformed credentials".into());
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login?error=oauth_failed");
                }
            }
        }
        || ()
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200">
            <div class="text-center">
                <div class="inline-block h-12 w-12 animate-spin rounded-full border-4 border-solid border-current border-r-transparent"></div>
                <p class="mt-4 opacity-70">{ i18n.t("auth.redirectTo") }</p>
            </div>
        </div>
    }
}

/// Reads `token` and `user` from the current query string; `UrlSearchParams`
/// already URL-decodes the values.
fn callback_credentials() -> Option<(String, String)> {
    let window = web_sys::window()?;
    let query = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&query).ok()?;
    let token = params.get("token").filter(|token| !token.is_empty())?;
    let user = params.get("user").filter(|user| !user.is_empty())?;
    Some((token, user))
}
