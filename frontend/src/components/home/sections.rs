use yew::prelude::*;

use common::model::dataset::{format_date, DatasetRecord};
use common::statistics::{DatasetStatistics, RankingEntry};

use crate::helpers::{format_count, route_link};
use crate::routes::Route;

fn stat_card(label: &str, value: String) -> Html {
    html! {
        <div class="stat-card">
            <div class="value">{ value }</div>
            <div class="muted">{ label.to_string() }</div>
        </div>
    }
}

pub fn statistics(stats: Option<&DatasetStatistics>, error: Option<&str>) -> Html {
    if let Some(err) = error {
        return html! { <div class="alert error">{ format!("Statistics unavailable: {err}") }</div> };
    }
    let Some(stats) = stats else {
        return html! { <p class="muted">{"Loading statistics…"}</p> };
    };
    let growth = match stats.growth {
        Some(g) => format!("{g:+.1}%"),
        None => "—".to_string(),
    };
    let latest_year = stats
        .per_year
        .last()
        .map(|(year, count)| format!("{} in {year}", format_count(*count)))
        .unwrap_or_else(|| "—".to_string());
    let widest = stats.top_categories.first().map(|c| c.count).unwrap_or(1).max(1);

    html! {
        <section class="statistics">
            <h2>{"Data at a glance"}</h2>
            <div class="stat-grid">
                { stat_card("Datasets", format_count(stats.total_datasets)) }
                { stat_card("Categories", format_count(stats.total_categories)) }
                { stat_card("Published latest year", latest_year) }
                { stat_card("Growth over previous year", growth) }
            </div>
            if !stats.top_categories.is_empty() {
                <h3>{"Top categories"}</h3>
                <div class="category-bars">
                    { for stats.top_categories.iter().map(|c| html! {
                        <div class="category-bar">
                            <span>{ c.name.clone() }</span>
                            <div style={format!("width:{}%;background:var(--primary);height:8px;border-radius:4px", c.count * 100 / widest)}></div>
                            <span class="muted">{ format_count(c.count) }</span>
                        </div>
                    }) }
                </div>
            }
        </section>
    }
}

pub fn recent_datasets(records: &[DatasetRecord], on_navigate: &Callback<Route>) -> Html {
    if records.is_empty() {
        return html! {};
    }
    html! {
        <section class="recent">
            <div class="results-header">
                <h2>{"Recently published"}</h2>
                { route_link(Route::datasets(), on_navigate, classes!(), html! {"View all datasets"}) }
            </div>
            { for records.iter().map(|record| html! {
                <article class="dataset-card">
                    <h3>{ route_link(Route::Dataset(record.id), on_navigate, classes!(), html! { {record.title.clone()} }) }</h3>
                    <p class="muted">{ format!("{} · {}", record.organization, format_date(&record.created_at)) }</p>
                </article>
            }) }
        </section>
    }
}

pub fn leaderboard(entries: Option<&[RankingEntry]>) -> Html {
    let body = match entries {
        None => html! { <p class="muted">{"Loading contributors…"}</p> },
        Some([]) => html! { <p class="muted">{"No contributions yet. Be the first!"}</p> },
        Some(entries) => html! {
            <table class="preview-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"Contributor"}</th>
                        <th>{"Department"}</th>
                        <th>{"Contributions"}</th>
                        <th>{"Most frequent"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for entries.iter().enumerate().map(|(i, entry)| html! {
                        <tr>
                            <td>{ i + 1 }</td>
                            <td>{ entry.name.clone() }</td>
                            <td>{ entry.department.clone() }</td>
                            <td>{ entry.contributions }</td>
                            <td>{ entry.recent.clone() }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        },
    };
    html! {
        <section class="leaderboard">
            <h2>{"Top contributors"}</h2>
            { body }
        </section>
    }
}
