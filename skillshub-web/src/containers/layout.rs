use yew::prelude::*;

use super::footer::Footer;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

/// Standard page chrome: navbar on top, footer below the content.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-base-200/40">
            <Navbar />
            <main class="flex-1">
                { props.children.clone() }
            </main>
            <Footer />
        </div>
    }
}
