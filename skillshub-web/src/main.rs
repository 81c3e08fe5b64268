mod api;
mod app;
mod components;
mod config;
mod containers;
mod i18n;
mod language;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod i18n_test;
#[cfg(test)]
mod routes_test;
#[cfg(test)]
mod session_test;

use std::collections::HashMap;

use app::App;
use i18nrs::yew::I18nProvider;
use i18nrs::yew::I18nProviderConfig;
use language::supported_languages;
use session::SessionProvider;
use yew::Renderer;
use yew::{Html, function_component, html};

use crate::i18n::Locale;

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let translations: HashMap<&str, &str> = supported_languages()
        .iter()
        .map(|(&key, value)| (key, value.translation))
        .collect();

    let config = I18nProviderConfig {
        translations,
        default_language: Locale::default().code().to_string(),
        ..Default::default()
    };

    html! {
        <SessionProvider>
            <I18nProvider ..config>
                <App />
            </I18nProvider>
        </SessionProvider>
    }
}

fn main() {
    // Disable truncation of panic payloads to debug any panics
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    Renderer::<InternationalApp>::new().render();
}
