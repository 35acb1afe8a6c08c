use yew::html::Scope;
use yew::prelude::*;

use common::model::dataset::format_date;
use common::review::{StatusFilter, Submission};

use super::add_category::add_category_sheet;
use super::detail::{detail_sheet, status_badge};
use super::messages::Msg;
use super::state::Dashboard;
use crate::components::pager::Pager;
use crate::helpers::format_count;

pub fn view(dashboard: &Dashboard, ctx: &Context<Dashboard>) -> Html {
    let link = ctx.link();
    html! {
        <div class="page dashboard">
            <div class="results-header">
                <div>
                    <h1>{"Submissions"}</h1>
                    <p class="muted">{"Review contributions before they are published."}</p>
                </div>
                <button class="btn primary" onclick={link.callback(|_| Msg::OpenAddCategory)}>
                    <span class="material-icons">{"add"}</span>
                    {"Add category"}
                </button>
            </div>
            if let Some(message) = &dashboard.success {
                <div class="alert success">{ message.clone() }</div>
            }
            if let Some(message) = &dashboard.error {
                <div class="alert error">{ message.clone() }</div>
            }
            { status_tabs(dashboard, link) }
            { table(dashboard, link) }
            <Pager
                page={dashboard.queue.page}
                total_pages={dashboard.queue.total_pages()}
                on_page={link.callback(Msg::SetPage)}
            />
            { detail_sheet(dashboard, link) }
            { add_category_sheet(dashboard, link) }
        </div>
    }
}

fn status_tabs(dashboard: &Dashboard, link: &Scope<Dashboard>) -> Html {
    let counts = dashboard.queue.counts();
    html! {
        <div class="tabs">
            { for StatusFilter::ALL.into_iter().map(|filter| html! {
                <button
                    class={classes!("btn", (dashboard.queue.filter == filter).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SetFilter(filter))}
                >
                    { format!("{} ({})", filter.label(), format_count(counts.get(filter))) }
                </button>
            }) }
        </div>
    }
}

fn row(submission: &Submission, link: &Scope<Dashboard>) -> Html {
    let id = submission.id;
    html! {
        <tr class="clickable" onclick={link.callback(move |_| Msg::OpenDetail(id))}>
            <td>{ submission.title.clone() }</td>
            <td>{ submission.submitted_by.clone() }</td>
            <td>{ submission.organization.clone() }</td>
            <td>{ submission.request_type.clone() }</td>
            <td>{ format_date(&submission.submitted_at) }</td>
            <td>{ status_badge(submission.status) }</td>
        </tr>
    }
}

fn table(dashboard: &Dashboard, link: &Scope<Dashboard>) -> Html {
    if dashboard.loading {
        return html! { <p class="empty-state">{"Loading submissions..."}</p> };
    }
    let items = dashboard.queue.page_items();
    if items.is_empty() {
        return html! {
            <div class="empty-state">
                <span class="material-icons">{"inbox"}</span>
                <p>{"No submissions in this view."}</p>
            </div>
        };
    }
    html! {
        <table class="preview-table">
            <thead>
                <tr>
                    <th>{"Title"}</th>
                    <th>{"Submitted by"}</th>
                    <th>{"Organization"}</th>
                    <th>{"Type"}</th>
                    <th>{"Date"}</th>
                    <th>{"Status"}</th>
                </tr>
            </thead>
            <tbody>
                { for items.into_iter().map(|s| row(s, link)) }
            </tbody>
        </table>
    }
}
