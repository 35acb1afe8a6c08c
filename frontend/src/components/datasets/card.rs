use yew::prelude::*;

use common::model::dataset::{format_date, humanize_request_type, DatasetRecord};

use crate::helpers::route_link;
use crate::routes::Route;

const EXCERPT_CHARS: usize = 180;

#[derive(Properties, PartialEq)]
pub struct DatasetCardProps {
    pub record: DatasetRecord,
    pub on_navigate: Callback<Route>,
}

fn excerpt(message: &str) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

#[function_component(DatasetCard)]
pub fn dataset_card(props: &DatasetCardProps) -> Html {
    let record = &props.record;
    let title = if record.title.is_empty() {
        humanize_request_type(&record.request_type)
    } else {
        record.title.clone()
    };
    let files = record.resources().len();

    html! {
        <article class="dataset-card">
            <h3>
                { route_link(Route::Dataset(record.id), &props.on_navigate, classes!(), html! { {title} }) }
            </h3>
            <div class="meta">
                <span class="material-icons">{"apartment"}</span>
                <span>{ record.organization.clone() }</span>
                <span class="material-icons">{"event"}</span>
                <span>{ format_date(&record.created_at) }</span>
                if files > 0 {
                    <span class="material-icons">{"attach_file"}</span>
                    <span>{ format!("{files} file{}", if files == 1 { "" } else { "s" }) }</span>
                }
            </div>
            <p>{ excerpt(&record.message) }</p>
            <div>
                { for record.category_names().map(|name| html! { <span class="chip">{ name.to_string() }</span> }) }
                { for record.tag_names().map(|name| html! { <span class="chip tag">{ format!("#{name}") }</span> }) }
            </div>
        </article>
    }
}
