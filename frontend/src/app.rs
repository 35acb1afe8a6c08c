//! Root component: owns the session, the runtime configuration and the
//! current route, and renders the matching page under the header.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use common::requests::PortalConfig;
use common::session::{AccessDecision, Session};

use crate::api::{load_portal_config, Api};
use crate::components::categories::{CategoriesPage, CategoryPage};
use crate::components::contribute::ContributePage;
use crate::components::dashboard::Dashboard;
use crate::components::datasets::detail::DatasetDetail;
use crate::components::datasets::listing::DatasetsListing;
use crate::components::home::HomePage;
use crate::components::layout::{Header, NotFound};
use crate::components::login::LoginPage;
use crate::helpers::{show_toast, ToastKind};
use crate::routes::{self, Route};
use crate::storage;

pub enum Msg {
    ConfigLoaded(PortalConfig),
    Navigate(Route),
    Redirect(Route),
    LocationChanged,
    SignedIn(Session),
    SignOut,
}

pub struct App {
    config: Option<PortalConfig>,
    session: Session,
    route: Route,
    _popstate: Option<Closure<dyn Fn()>>,
}

impl App {
    fn listen_popstate(ctx: &Context<Self>) -> Option<Closure<dyn Fn()>> {
        let window = web_sys::window()?;
        let link = ctx.link().clone();
        let closure = Closure::<dyn Fn()>::new(move || link.send_message(Msg::LocationChanged));
        window
            .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(closure)
    }

    fn page(&self, ctx: &Context<Self>, config: &PortalConfig) -> Html {
        let api = Api::new(config.clone(), &self.session);
        let on_navigate = ctx.link().callback(Msg::Navigate);
        let session = self.session.clone();

        match &self.route {
            Route::Home => html! { <HomePage {api} {on_navigate} /> },
            Route::Datasets { query } => html! {
                <DatasetsListing key={query.clone()} {api} initial_query={query.clone()} {on_navigate} />
            },
            Route::Dataset(id) => html! {
                <DatasetDetail key={*id} {api} id={*id} {on_navigate} />
            },
            Route::Categories => html! { <CategoriesPage {api} {on_navigate} /> },
            Route::Category(id) => html! {
                <CategoryPage key={*id} {api} id={*id} {on_navigate} />
            },
            Route::Contribute => html! { <ContributePage {api} {session} {on_navigate} /> },
            Route::Dashboard if session.dashboard_access() == AccessDecision::Granted => html! {
                <Dashboard {api} {on_navigate} />
            },
            Route::Dashboard => html! { <p class="page">{"Checking access…"}</p> },
            Route::Login => html! {
                <LoginPage {api} on_signed_in={ctx.link().callback(Msg::SignedIn)} {on_navigate} />
            },
            Route::NotFound => html! { <NotFound {on_navigate} /> },
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link()
            .send_future(async { Msg::ConfigLoaded(load_portal_config().await) });
        Self {
            config: None,
            session: storage::load_session(),
            route: routes::current(),
            _popstate: Self::listen_popstate(ctx),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                self.config = Some(config);
                true
            }
            Msg::Navigate(route) => {
                routes::push(&route);
                self.route = route;
                true
            }
            Msg::Redirect(route) => {
                routes::replace(&route);
                self.route = route;
                true
            }
            Msg::LocationChanged => {
                let route = routes::current();
                let changed = route != self.route;
                self.route = route;
                changed
            }
            Msg::SignedIn(session) => {
                storage::save_session(&session);
                let target = if session.is_admin() {
                    Route::Dashboard
                } else {
                    Route::Contribute
                };
                show_toast(
                    &format!("Welcome, {}!", session.display_name()),
                    ToastKind::Success,
                );
                self.session = session;
                routes::push(&target);
                self.route = target;
                true
            }
            Msg::SignOut => {
                storage::clear_session();
                self.session = Session::anonymous();
                show_toast("You have been signed out.", ToastKind::Info);
                routes::push(&Route::Home);
                self.route = Route::Home;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.route != Route::Dashboard {
            return;
        }
        match self.session.dashboard_access() {
            AccessDecision::Granted => {}
            AccessDecision::RedirectToLogin => {
                show_toast("Please sign in to review contributions.", ToastKind::Info);
                ctx.link().send_message(Msg::Redirect(Route::Login));
            }
            AccessDecision::RedirectToContribute => {
                show_toast("Only administrators can open the dashboard.", ToastKind::Error);
                ctx.link().send_message(Msg::Redirect(Route::Contribute));
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let header = html! {
            <Header
                route={self.route.clone()}
                session={self.session.clone()}
                on_navigate={ctx.link().callback(Msg::Navigate)}
                on_sign_out={ctx.link().callback(|_: ()| Msg::SignOut)}
            />
        };
        let body = match &self.config {
            Some(config) => self.page(ctx, config),
            None => html! { <p class="page">{"Loading…"}</p> },
        };
        html! {
            <>
                { header }
                <main>{ body }</main>
            </>
        }
    }
}
