use i18nrs::yew::use_translation;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <footer class="footer footer-center bg-base-200 text-base-content p-6 mt-12">
            <aside>
                <p class="font-semibold">{ i18n.t("footer.about") }</p>
                <p class="text-sm opacity-70">{ i18n.t("footer.aboutDesc") }</p>
                <p class="text-xs opacity-60">{ i18n.t("footer.copyright") }</p>
            </aside>
        </footer>
    }
}
