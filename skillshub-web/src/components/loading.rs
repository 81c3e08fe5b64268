use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();
    html! {
        <div class="flex flex-col items-center justify-center min-h-[50vh]">
            <div class="inline-block h-8 w-8 animate-spin rounded-full border-4 border-solid border-blue-600 border-r-transparent"></div>
            <p class="mt-4 text-slate-600">{ i18n.t("home.loading") }</p>
        </div>
    }
}
