mod header;

pub use header::Header;

use yew::prelude::*;

use crate::helpers::route_link;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NotFoundProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFound)]
pub fn not_found(props: &NotFoundProps) -> Html {
    html! {
        <div class="page empty-state">
            <span class="material-icons">{"travel_explore"}</span>
            <h2>{"Page not found"}</h2>
            <p>{"The page you are looking for does not exist or was moved."}</p>
            { route_link(Route::datasets(), &props.on_navigate, classes!("btn", "primary"), html! {"Browse datasets"}) }
        </div>
    }
}
