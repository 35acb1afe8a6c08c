use gloo_console::error;
use yew::prelude::*;

use common::error::ApiError;
use common::listing::records_in_category;
use common::model::category::Category;
use common::model::dataset::DatasetRecord;

use crate::api::Api;
use crate::components::datasets::card::DatasetCard;
use crate::helpers::route_link;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct CategoryProps {
    pub api: Api,
    pub id: u64,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    DatasetsLoaded(Result<Vec<DatasetRecord>, ApiError>),
}

/// One category and its approved datasets. The API has no per-category
/// listing, so the approved records are fetched and narrowed here.
pub struct CategoryPage {
    category: Option<Category>,
    categories_loaded: bool,
    records: Option<Vec<DatasetRecord>>,
    error: Option<String>,
}

impl Component for CategoryPage {
    type Message = Msg;
    type Properties = CategoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let datasets_api = api.clone();
        ctx.link()
            .send_future(async move { Msg::CategoriesLoaded(api.fetch_categories().await) });
        ctx.link()
            .send_future(async move { Msg::DatasetsLoaded(datasets_api.fetch_all_approved().await) });
        Self {
            category: None,
            categories_loaded: false,
            records: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::CategoriesLoaded(Ok(categories)) => {
                let id = ctx.props().id;
                self.category = categories.into_iter().find(|c| c.id == id);
                self.categories_loaded = true;
            }
            Msg::DatasetsLoaded(Ok(records)) => self.records = Some(records),
            Msg::CategoriesLoaded(Err(err)) | Msg::DatasetsLoaded(Err(err)) => {
                error!(format!("category {}: {err}", ctx.props().id));
                self.error = Some(err.to_string());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = &ctx.props().on_navigate;
        let back = route_link(
            Route::Categories,
            on_navigate,
            classes!("btn"),
            html! { <><span class="material-icons">{"arrow_back"}</span>{"Back to categories"}</> },
        );

        if let Some(err) = &self.error {
            return html! {
                <div class="page">
                    <div class="alert error">{ format!("Failed to load category data: {err}") }</div>
                    { back }
                </div>
            };
        }
        let (Some(category), Some(records)) = (&self.category, &self.records) else {
            if self.categories_loaded && self.category.is_none() {
                return html! {
                    <div class="page empty-state">
                        <span class="material-icons">{"folder_off"}</span>
                        <h3>{"Category Not Found"}</h3>
                        <p>{"The category you're looking for doesn't exist."}</p>
                        { back }
                    </div>
                };
            }
            return html! { <div class="page empty-state"><p>{"Loading category…"}</p></div> };
        };

        let datasets = records_in_category(records, category.id);
        let list = if datasets.is_empty() {
            html! {
                <div class="empty-state">
                    <span class="material-icons">{"inventory_2"}</span>
                    <p>{ format!("No approved datasets in {} yet.", category.name) }</p>
                </div>
            }
        } else {
            html! {
                <div class="dataset-cards grid">
                    { for datasets.into_iter().map(|record| html! {
                        <DatasetCard key={record.id} record={record.clone()} on_navigate={on_navigate.clone()} />
                    }) }
                </div>
            }
        };

        html! {
            <div class="page category">
                { back }
                <div class="category-header">
                    <span class="material-icons category-icon">{ category.icon().material_icon() }</span>
                    <div>
                        <h1>{ category.name.clone() }</h1>
                        if !category.description.is_empty() {
                            <p>{ category.description.clone() }</p>
                        }
                        <span class="chip">{ category.datasets_label() }</span>
                    </div>
                </div>
                <h2>{ format!("Datasets in {}", category.name) }</h2>
                { list }
            </div>
        }
    }
}
