use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::Route;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center min-h-[60vh]">
            <h1 class="text-6xl font-bold opacity-30">{ "404" }</h1>
            <Link<Route> to={Route::Home} classes="btn btn-primary mt-6">
                { "SkillsHub" }
            </Link<Route>>
        </div>
    }
}
