use gloo_console::error;
use yew::prelude::*;

use common::listing::{filter_records, total_pages};

use super::messages::Msg;
use super::state::DatasetsListing;

pub fn update(listing: &mut DatasetsListing, ctx: &Context<DatasetsListing>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            listing.loading = true;
            listing.error = None;
            let api = ctx.props().api.clone();
            ctx.link()
                .send_future(async move { Msg::Loaded(api.fetch_all_approved().await) });
            true
        }
        Msg::Loaded(Ok(records)) => {
            listing.records = records;
            listing.loading = false;
            true
        }
        Msg::Loaded(Err(err)) => {
            error!(format!("datasets: {err}"));
            listing.loading = false;
            listing.error = Some(err.to_string());
            true
        }
        Msg::SetQuery(query) => {
            listing.query.set_query(query);
            true
        }
        Msg::ToggleCategory(name) => {
            listing.query.toggle_category(&name);
            true
        }
        Msg::ToggleType(request_type) => {
            listing.query.toggle_type(&request_type);
            true
        }
        Msg::SetSort(sort) => {
            listing.query.set_sort(sort);
            true
        }
        Msg::ClearFilters => {
            listing.query.clear_filters();
            true
        }
        Msg::GoToPage(page) => {
            let last = total_pages(filter_records(&listing.records, &listing.query).len());
            if page < 1 || page > last || page == listing.query.page {
                return false;
            }
            listing.query.set_page(page);
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            true
        }
        Msg::SetLayout(layout) => {
            listing.layout = layout;
            true
        }
        Msg::ToggleFilters => {
            listing.filters_open = !listing.filters_open;
            true
        }
    }
}
