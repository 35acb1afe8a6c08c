//! Contribution form: metadata fields plus a validated multi-file input,
//! submitted as multipart to `POST /contributes`. Signed-out visitors see the
//! form disabled with a sign-in prompt.

use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use common::session::Session;

use crate::api::Api;
use crate::routes::Route;

pub use messages::Msg;
pub use state::ContributePage;

#[derive(Properties, PartialEq)]
pub struct ContributeProps {
    pub api: Api,
    pub session: Session,
    pub on_navigate: Callback<Route>,
}

impl Component for ContributePage {
    type Message = Msg;
    type Properties = ContributeProps;

    fn create(ctx: &Context<Self>) -> Self {
        ContributePage::new(&ctx.props().session)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
