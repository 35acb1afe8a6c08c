use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::chart::configure_chart;
use common::model::dataset::{format_date, humanize_request_type, DatasetRecord, FileResource};
use common::upload::format_file_size;

use super::chart::{BarChart, PreviewTable};
use super::{DatasetDetail, Msg};
use crate::helpers::{markdown_html, route_link};
use crate::routes::Route;

pub fn view(detail: &DatasetDetail, ctx: &Context<DatasetDetail>) -> Html {
    let on_navigate = &ctx.props().on_navigate;
    let back = route_link(
        Route::datasets(),
        on_navigate,
        classes!("btn"),
        html! { <><span class="material-icons">{"arrow_back"}</span>{"Back to datasets"}</> },
    );

    if detail.loading {
        return html! { <div class="page empty-state"><p>{"Loading dataset…"}</p></div> };
    }
    let record = match (&detail.record, &detail.error) {
        (Some(record), _) => record,
        (None, Some(err)) if err.status() == Some(404) => {
            return html! {
                <div class="page empty-state">
                    <span class="material-icons">{"folder_off"}</span>
                    <h3>{"Dataset Not Found"}</h3>
                    <p>{"It may have been removed or is still awaiting review."}</p>
                    { back }
                </div>
            };
        }
        (None, err) => {
            let message = err
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "Unknown error".to_string());
            return html! {
                <div class="page">
                    <div class="alert error">{ message }</div>
                    { back }
                </div>
            };
        }
    };

    html! {
        <div class="page dataset-detail">
            { back }
            <h1>{ record.title.clone() }</h1>
            <div class="meta">
                <span class="chip">{ humanize_request_type(&record.request_type) }</span>
                <span>{ record.organization.clone() }</span>
                <span>{ format!("Published {}", format_date(&record.created_at)) }</span>
                if !record.updated_at.is_empty() {
                    <span>{ format!("Updated {}", format_date(&record.updated_at)) }</span>
                }
            </div>
            <div class="description">{ markdown_html(&record.message) }</div>
            <div>
                { for record.category_names().map(|name| html! { <span class="chip">{ name.to_string() }</span> }) }
                { for record.tag_names().map(|name| html! { <span class="chip tag">{ format!("#{name}") }</span> }) }
            </div>
            { chart_section(detail, record, ctx) }
            { resources(record, ctx) }
            { api_access(record, ctx) }
        </div>
    }
}

fn chart_section(detail: &DatasetDetail, record: &DatasetRecord, ctx: &Context<DatasetDetail>) -> Html {
    if !record.has_resources() {
        return html! {};
    }
    let link = ctx.link();
    if !detail.chart_open {
        return html! {
            <section class="chart-panel">
                <h2>{"Data visualization"}</h2>
                <button class="btn primary" onclick={link.callback(|_| Msg::ShowChart(None))}>
                    <span class="material-icons">{"bar_chart"}</span>
                    {"View chart"}
                </button>
            </section>
        };
    }

    let body = if detail.chart_loading {
        html! { <p>{"Loading chart data…"}</p> }
    } else if let Some(err) = &detail.chart_error {
        html! { <div class="alert error">{ err.clone() }</div> }
    } else if let Some(data) = &detail.file_data {
        let table = data.table();
        match configure_chart(&table) {
            Some(config) => {
                let total = table.rows.len();
                let truncated = config.truncated_from(total);
                let shown = config.data.len();
                html! {
                    <>
                        <BarChart {config} />
                        if truncated {
                            <p class="muted">{ format!("Chart shows {shown} of {total} rows.") }</p>
                        }
                        <h3>{"Data preview"}</h3>
                        <PreviewTable {table} />
                    </>
                }
            }
            None => html! {
                <div class="empty-state">
                    <span class="material-icons">{"insert_chart_outlined"}</span>
                    <p>{"No chart available for this file."}</p>
                </div>
            },
        }
    } else {
        html! {}
    };

    html! {
        <section class="chart-panel">
            <div class="results-header">
                <h2>{"Data visualization"}</h2>
                <button class="btn" onclick={link.callback(|_| Msg::HideChart)}>{"Hide chart"}</button>
            </div>
            { body }
        </section>
    }
}

fn resources(record: &DatasetRecord, ctx: &Context<DatasetDetail>) -> Html {
    let files = record.resources();
    if files.is_empty() {
        return html! {
            <section>
                <h2>{"Resources"}</h2>
                <p class="muted">{"No files are attached to this dataset."}</p>
            </section>
        };
    }
    let config = ctx.props().api.config().clone();
    let link = ctx.link();
    let row = |file: &FileResource| {
        let size = if file.formatted_size.is_empty() {
            format_file_size(file.file_size)
        } else {
            file.formatted_size.clone()
        };
        let file_id = (file.id != 0).then_some(file.id);
        html! {
            <li class="resource">
                <span class="material-icons">{"description"}</span>
                <strong>{ file.original_name.clone() }</strong>
                <span class="muted">{ format!("{} · {}", file.file_type.to_uppercase(), size) }</span>
                <a class="btn" href={config.download_url(&file.file_path)} download={file.original_name.clone()}>
                    <span class="material-icons">{"download"}</span>{"Download"}
                </a>
                if file_id.is_some() {
                    <button class="btn" onclick={link.callback(move |_| Msg::ShowChart(file_id))}>
                        <span class="material-icons">{"bar_chart"}</span>{"Chart"}
                    </button>
                }
            </li>
        }
    };

    html! {
        <section>
            <h2>{ format!("Resources ({})", files.len()) }</h2>
            <ul class="resources">{ for files.iter().map(row) }</ul>
        </section>
    }
}

fn api_access(record: &DatasetRecord, ctx: &Context<DatasetDetail>) -> Html {
    let endpoint = ctx
        .props()
        .api
        .config()
        .endpoint(&format!("/contributes/approved/{}", record.id));
    let onfocus = Callback::from(|e: FocusEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        input.select();
    });
    html! {
        <section>
            <h2>{"API access"}</h2>
            <p>{"Fetch this dataset's metadata as JSON:"}</p>
            <input class="endpoint" readonly={true} value={endpoint} {onfocus} />
        </section>
    }
}
