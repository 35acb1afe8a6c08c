use gloo_console::error;
use yew::prelude::*;

use common::error::ApiError;
use common::model::category::Category;

use crate::api::Api;
use crate::helpers::route_link;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct CategoriesProps {
    pub api: Api,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<Vec<Category>, ApiError>),
}

pub struct CategoriesPage {
    categories: Option<Vec<Category>>,
    error: Option<String>,
}

impl Component for CategoriesPage {
    type Message = Msg;
    type Properties = CategoriesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        ctx.link()
            .send_future(async move { Msg::Loaded(api.fetch_categories().await) });
        Self {
            categories: None,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(categories)) => self.categories = Some(categories),
            Msg::Loaded(Err(err)) => {
                error!(format!("categories: {err}"));
                self.error = Some(err.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        let body = match (&self.categories, &self.error) {
            (_, Some(err)) => html! {
                <div class="alert error">{ format!("Could not load categories: {err}") }</div>
            },
            (None, None) => html! { <p class="empty-state">{"Loading categories…"}</p> },
            (Some(categories), None) if categories.is_empty() => html! {
                <div class="empty-state">
                    <span class="material-icons">{"category"}</span>
                    <p>{"No categories yet."}</p>
                </div>
            },
            (Some(categories), None) => html! {
                <div class="category-grid">
                    { for categories.iter().map(|category| category_card(category, on_navigate)) }
                </div>
            },
        };

        html! {
            <div class="page categories">
                <h1>{"Data Categories"}</h1>
                <p>{"Explore the public datasets of Tarlac Province by subject."}</p>
                { body }
            </div>
        }
    }
}

fn category_card(category: &Category, on_navigate: &Callback<Route>) -> Html {
    route_link(
        Route::Category(category.id),
        on_navigate,
        classes!("category-card"),
        html! {
            <>
                <span class="material-icons category-icon">{ category.icon().material_icon() }</span>
                <div>
                    <h3>{ category.name.clone() }</h3>
                    <span class="chip">{ category.datasets_label() }</span>
                    if !category.description.is_empty() {
                        <p class="muted">{ category.description.clone() }</p>
                    }
                </div>
            </>
        },
    )
}
