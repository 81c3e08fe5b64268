use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::{use_location, use_navigator};
use yew_router::prelude::Routable;

use crate::i18n::{Locale, localized_path};
use crate::language;
use crate::routes::Route;

/// Language dropdown. Picking a language switches the translation table and
/// rewrites the current path into the matching locale form; picking the
/// already-active language leaves the URL alone.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let navigator = use_navigator();
    let location = use_location();
    let language_state = use_state_eq(|| i18n.get_current_language().to_string());
    let switch_label = i18n.t("nav.switchLanguage");

    {
        let language_state = language_state.clone();
        use_effect_with(i18n.get_current_language().to_string(), move |current| {
            language_state.set(current.clone());
            || ()
        });
    }

    let on_pick = {
        let language_state = language_state.clone();
        Callback::from(move |code: String| {
            if *language_state == code {
                return;
            }
            language_state.set(code.clone());
            set_language.emit(code.clone());

            let Ok(locale) = code.parse::<Locale>() else {
                return;
            };
            if let (Some(navigator), Some(location)) = (navigator.clone(), location.clone()) {
                let rewritten = localized_path(location.path(), locale);
                if let Some(route) = Route::recognize(&rewritten) {
                    navigator.push(&route);
                }
            }
        })
    };

    let active_code = (*language_state).clone();
    let active_flag = language::get_language_info(&active_code)
        .map(|info| info.flag)
        .unwrap_or("🌐");
    let mut languages: Vec<_> = language::supported_languages().into_values().collect();
    languages.sort_by(|a, b| a.native_name.cmp(b.native_name));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-sm">
                <span>{ active_flag }</span>
                <span class="text-sm">{ switch_label }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
            {
                for languages.into_iter().map(|info| {
                    let code = info.code.to_string();
                    let is_active = code == active_code;
                    let on_pick = on_pick.clone();
                    html! {
                        <li>
                            <a
                                class={if is_active { "active" } else { "" }}
                                onclick={move |event: MouseEvent| {
                                    event.prevent_default();
                                    on_pick.emit(code.clone());
                                }}>
                                <span>{ info.flag }</span>
                                <span>{ info.native_name }</span>
                            </a>
                        </li>
                    }
                })
            }
            </ul>
        </div>
    }
}
