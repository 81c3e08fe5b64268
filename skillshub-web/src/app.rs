use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::{Route, switch};

/// Router shell. Session and translation contexts are mounted above this in
/// `main`, so every screen reached through `switch` can use them.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
