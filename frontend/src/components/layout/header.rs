use yew::prelude::*;

use common::session::Session;

use crate::helpers::route_link;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub route: Route,
    pub session: Session,
    pub on_navigate: Callback<Route>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let section = props.route.section();
    let nav = |route: Route, label: &'static str| {
        let class = classes!((route.section() == section).then_some("active"));
        route_link(route, &props.on_navigate, class, html! { {label} })
    };

    let account = if props.session.is_authenticated() {
        let on_sign_out = props.on_sign_out.reform(|_: MouseEvent| ());
        html! {
            <div class="account">
                <span class="material-icons">{"account_circle"}</span>
                <span>{ props.session.display_name().to_string() }</span>
                <button class="btn" onclick={on_sign_out}>{"Sign out"}</button>
            </div>
        }
    } else {
        route_link(Route::Login, &props.on_navigate, classes!("btn", "primary"), html! {"Sign in"})
    };

    html! {
        <header class="portal-header">
            { route_link(Route::Home, &props.on_navigate, classes!("brand"), html! {
                <strong>{"Tarlac Open Data Portal"}</strong>
            }) }
            <nav>
                { nav(Route::Home, "Home") }
                { nav(Route::datasets(), "Datasets") }
                { nav(Route::Categories, "Categories") }
                { nav(Route::Contribute, "Contribute") }
                if props.session.is_admin() {
                    { nav(Route::Dashboard, "Dashboard") }
                }
            </nav>
            { account }
        </header>
    }
}
