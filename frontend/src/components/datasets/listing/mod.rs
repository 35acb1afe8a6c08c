//! Dataset listing page.
//!
//! Approved records are fetched once on creation; every filter, sort and
//! page change re-derives the visible page with
//! `common::listing::list_datasets`.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use crate::api::Api;
use crate::routes::Route;

pub use messages::Msg;
pub use state::DatasetsListing;

#[derive(Properties, PartialEq)]
pub struct ListingProps {
    pub api: Api,
    #[prop_or_default]
    pub initial_query: String,
    pub on_navigate: Callback<Route>,
}

impl Component for DatasetsListing {
    type Message = Msg;
    type Properties = ListingProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        DatasetsListing::new(&ctx.props().initial_query)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
