//! Admin dashboard: every contribution with status tabs, a paginated table,
//! a detail sheet for approving/rejecting and relabelling a submission, and
//! a sheet for creating categories.
//!
//! Access is decided by `App` before this component is created; the API
//! still rejects calls made without an admin token.

use yew::prelude::*;

mod add_category;
mod detail;
mod messages;
mod state;
mod update;
mod view;

use crate::api::Api;
use crate::routes::Route;

pub use messages::Msg;
pub use state::Dashboard;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api: Api,
    pub on_navigate: Callback<Route>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Dashboard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
