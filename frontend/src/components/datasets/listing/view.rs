//! Listing layout: facet sidebar on the left, results header, cards and
//! pager on the right.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::listing::{ListingPage, SortKey};
use common::model::dataset::humanize_request_type;

use super::messages::Msg;
use super::state::{DatasetsListing, Layout};
use crate::components::datasets::card::DatasetCard;
use crate::components::pager::Pager;
use crate::helpers::format_count;

pub fn view(listing: &DatasetsListing, ctx: &Context<DatasetsListing>) -> Html {
    let link = ctx.link();

    if listing.loading {
        return html! {
            <div class="page empty-state">
                <span class="material-icons">{"hourglass_empty"}</span>
                <p>{"Loading datasets…"}</p>
            </div>
        };
    }
    if let Some(err) = &listing.error {
        return html! {
            <div class="page">
                <div class="alert error">{ format!("Could not load datasets: {err}") }</div>
                <button class="btn" onclick={link.callback(|_| Msg::Load)}>{"Try again"}</button>
            </div>
        };
    }

    let page = listing.page();
    html! {
        <div class="page">
            <h1>{"Datasets"}</h1>
            { search_box(listing, link) }
            <button class="btn filters-toggle" onclick={link.callback(|_| Msg::ToggleFilters)}>
                <span class="material-icons">{"filter_list"}</span>
                { if listing.filters_open { "Hide filters" } else { "Show filters" } }
            </button>
            <div class="listing">
                { facets(listing, &page, link) }
                <section>
                    { results_header(listing, &page, link) }
                    { results(listing, &page, ctx) }
                    <Pager
                        page={page.page}
                        total_pages={page.total_pages}
                        on_page={link.callback(Msg::GoToPage)}
                    />
                </section>
            </div>
        </div>
    }
}

fn search_box(listing: &DatasetsListing, link: &Scope<DatasetsListing>) -> Html {
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetQuery(input.value())
    });
    html! {
        <div class="search">
            <span class="material-icons">{"search"}</span>
            <input
                type="search"
                placeholder="Search datasets, organizations, tags…"
                value={listing.query.query.clone()}
                {oninput}
            />
        </div>
    }
}

fn facets(listing: &DatasetsListing, page: &ListingPage<'_>, link: &Scope<DatasetsListing>) -> Html {
    let query = &listing.query;
    let category_options = page.available_categories.iter().map(|name| {
        let checked = query.selected_categories.contains(name);
        let value = name.clone();
        html! {
            <label>
                <input
                    type="checkbox"
                    {checked}
                    onchange={link.callback(move |_| Msg::ToggleCategory(value.clone()))}
                />
                { name.clone() }
            </label>
        }
    });
    let type_options = page.available_types.iter().map(|request_type| {
        let checked = query.selected_types.contains(request_type);
        let value = request_type.clone();
        html! {
            <label>
                <input
                    type="checkbox"
                    {checked}
                    onchange={link.callback(move |_| Msg::ToggleType(value.clone()))}
                />
                { humanize_request_type(request_type) }
            </label>
        }
    });

    html! {
        <aside class={classes!("facets", listing.filters_open.then_some("open"))}>
            <h4>{"Categories"}</h4>
            if page.available_categories.is_empty() {
                <p class="muted">{"No categories yet"}</p>
            } else {
                { for category_options }
            }
            <h4>{"Request type"}</h4>
            { for type_options }
            if query.has_active_filters() {
                <button class="btn" onclick={link.callback(|_| Msg::ClearFilters)}>
                    {"Clear filters"}
                </button>
            }
        </aside>
    }
}

fn results_header(listing: &DatasetsListing, page: &ListingPage<'_>, link: &Scope<DatasetsListing>) -> Html {
    let (start, end) = page.showing_range();
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetSort(SortKey::from_value(&select.value()))
    });
    let layout_button = |layout: Layout, icon: &'static str| {
        html! {
            <button
                class={classes!("btn", (listing.layout == layout).then_some("current"))}
                onclick={link.callback(move |_| Msg::SetLayout(layout))}
            >
                <span class="material-icons">{ icon }</span>
            </button>
        }
    };

    html! {
        <div class="results-header">
            <span>
                { format!(
                    "Showing {}–{} of {} datasets",
                    start,
                    end,
                    format_count(page.total_count)
                ) }
            </span>
            <div>
                <select {onchange}>
                    { for SortKey::ALL.into_iter().map(|key| html! {
                        <option value={key.value()} selected={key == listing.query.sort}>
                            { key.label() }
                        </option>
                    }) }
                </select>
                { layout_button(Layout::List, "view_list") }
                { layout_button(Layout::Grid, "grid_view") }
            </div>
        </div>
    }
}

fn results(listing: &DatasetsListing, page: &ListingPage<'_>, ctx: &Context<DatasetsListing>) -> Html {
    if page.is_empty() {
        return html! {
            <div class="empty-state">
                <span class="material-icons">{"search_off"}</span>
                <h3>{"No datasets found"}</h3>
                <p>{"Try adjusting your search or filters."}</p>
                if listing.query.has_active_filters() {
                    <button class="btn" onclick={ctx.link().callback(|_| Msg::ClearFilters)}>
                        {"Clear filters"}
                    </button>
                }
            </div>
        };
    }
    let on_navigate = ctx.props().on_navigate.clone();
    html! {
        <div class={classes!("dataset-cards", (listing.layout == Layout::Grid).then_some("grid"))}>
            { for page.items.iter().map(|record| html! {
                <DatasetCard key={record.id} record={(*record).clone()} on_navigate={on_navigate.clone()} />
            }) }
        </div>
    }
}
