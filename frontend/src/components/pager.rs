//! Numbered pager shared by the listing and the review table.

use yew::prelude::*;

use common::listing::{page_window, PageSlot};

#[derive(Properties, PartialEq)]
pub struct PagerProps {
    pub page: usize,
    pub total_pages: usize,
    pub on_page: Callback<usize>,
}

#[function_component(Pager)]
pub fn pager(props: &PagerProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }
    let page = props.page;
    let go = |target: usize| props.on_page.reform(move |_: MouseEvent| target);

    html! {
        <nav class="pager" aria-label="Pagination">
            <button class="btn" disabled={page <= 1} onclick={go(page.saturating_sub(1))}>
                <span class="material-icons">{"chevron_left"}</span>
            </button>
            { for page_window(page, props.total_pages).into_iter().map(|slot| match slot {
                PageSlot::Page(n) => html! {
                    <button class={classes!("btn", (n == page).then_some("current"))} onclick={go(n)}>
                        { n }
                    </button>
                },
                PageSlot::Gap => html! { <span class="gap">{"…"}</span> },
            }) }
            <button class="btn" disabled={page >= props.total_pages} onclick={go(page + 1)}>
                <span class="material-icons">{"chevron_right"}</span>
            </button>
        </nav>
    }
}
