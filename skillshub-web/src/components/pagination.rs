use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub page: u32,
    pub page_count: u32,
    pub on_change: Callback<u32>,
}

/// Prev/next pager over an already-paginated API response.
#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.page_count <= 1 {
        return html! {};
    }

    let prev = {
        let on_change = props.on_change.clone();
        let page = props.page;
        Callback::from(move |_| {
            if page > 1 {
                on_change.emit(page - 1);
            }
        })
    };
    let next = {
        let on_change = props.on_change.clone();
        let page = props.page;
        let page_count = props.page_count;
        Callback::from(move |_| {
            if page < page_count {
                on_change.emit(page + 1);
            }
        })
    };

    html! {
        <div class="join flex justify-center mt-6">
            <button class="join-item btn btn-sm" onclick={prev} disabled={props.page <= 1}>
                { "«" }
            </button>
            <button class="join-item btn btn-sm btn-disabled">
                { format!("{} / {}", props.page, props.page_count) }
            </button>
            <button class="join-item btn btn-sm" onclick={next} disabled={props.page >= props.page_count}>
                { "»" }
            </button>
        </div>
    }
}
