//! Submission detail sheet: metadata, files, label editing and the status
//! actions, each confirmed before it is sent.

use yew::html::Scope;
use yew::prelude::*;

use common::model::dataset::{format_date, ContributionStatus, Label};
use common::review::{ReviewUpdate, Submission};

use super::messages::Msg;
use super::state::Dashboard;
use crate::helpers::markdown_html;
use crate::tops_sheet::TopSheet;

pub fn status_badge(status: ContributionStatus) -> Html {
    html! { <span class={classes!("status", status.as_str())}>{ status.label() }</span> }
}

fn confirmation_text(update: &ReviewUpdate) -> &'static str {
    match update.status {
        Some(ContributionStatus::Approved) => "Approve this submission and publish it?",
        Some(ContributionStatus::Rejected) => "Reject this submission?",
        Some(ContributionStatus::Pending) => "Move this submission back to pending review?",
        None => "Save the category and tag changes?",
    }
}

fn label_picker(
    title: &'static str,
    options: Vec<Label>,
    selected: &[Label],
    link: &Scope<Dashboard>,
    on_toggle: fn(Label) -> Msg,
) -> Html {
    html! {
        <div class="label-picker">
            <h4>{ title }</h4>
            if options.is_empty() {
                <p class="muted">{"None available"}</p>
            }
            { for options.into_iter().map(|label| {
                let chosen = selected.iter().any(|s| s.id == label.id);
                let name = label.name.clone();
                html! {
                    <button
                        type="button"
                        class={classes!("chip", chosen.then_some("selected"))}
                        onclick={link.callback(move |_| on_toggle(label.clone()))}
                    >
                        { name }
                    </button>
                }
            }) }
        </div>
    }
}

fn actions(dashboard: &Dashboard, submission: &Submission, link: &Scope<Dashboard>) -> Html {
    if let Some(proposal) = &dashboard.proposal {
        return html! {
            <div class="confirm">
                <p>{ confirmation_text(proposal) }</p>
                <button class="btn" onclick={link.callback(|_| Msg::CancelProposal)}>{"Cancel"}</button>
                <button class="btn primary" onclick={link.callback(|_| Msg::Confirm)}>{"Confirm"}</button>
            </div>
        };
    }
    let status_button = |status: ContributionStatus, label: &'static str, icon: &'static str| {
        html! {
            <button
                class="btn"
                disabled={dashboard.saving || submission.status == status}
                onclick={link.callback(move |_| Msg::Propose(ReviewUpdate::status(status)))}
            >
                <span class="material-icons">{ icon }</span>{ label }
            </button>
        }
    };
    let changes = dashboard.draft.changes(submission);
    let has_changes = changes.is_some();
    let on_save = link.batch_callback(move |_: MouseEvent| changes.clone().map(Msg::Propose));

    html! {
        <div class="actions">
            { status_button(ContributionStatus::Approved, "Approve", "check_circle") }
            { status_button(ContributionStatus::Rejected, "Reject", "cancel") }
            { status_button(ContributionStatus::Pending, "Mark pending", "schedule") }
            <button class="btn primary" disabled={dashboard.saving || !has_changes} onclick={on_save}>
                <span class="material-icons">{"save"}</span>
                { if dashboard.saving { "Saving…" } else { "Save labels" } }
            </button>
        </div>
    }
}

fn body(dashboard: &Dashboard, submission: &Submission, link: &Scope<Dashboard>) -> Html {
    html! {
        <div class="submission">
            <div class="meta">
                { status_badge(submission.status) }
                <span>{ submission.request_type.clone() }</span>
                <span>{ format!("by {}", submission.submitted_by) }</span>
                <span>{ submission.organization.clone() }</span>
                <span>{ format_date(&submission.submitted_at) }</span>
            </div>
            <div class="description">{ markdown_html(&submission.message) }</div>
            <h4>{ files_heading(submission) }</h4>
            <ul class="resources">
                { for submission.files.iter().map(|f| html! {
                    <li>
                        <span class="material-icons">{"description"}</span>
                        { format!("{} ({})", f.original_name, f.formatted_size) }
                    </li>
                }) }
            </ul>
            { label_picker("Categories", dashboard.category_options(), &dashboard.draft.categories, link, Msg::ToggleCategory) }
            { label_picker("Tags", dashboard.tag_options(), &dashboard.draft.tags, link, Msg::ToggleTag) }
            { actions(dashboard, submission, link) }
        </div>
    }
}

fn files_heading(submission: &Submission) -> String {
    match submission.files.len() {
        0 => "No files attached".to_string(),
        1 => "1 file".to_string(),
        n => format!("{n} files"),
    }
}

pub fn detail_sheet(dashboard: &Dashboard, link: &Scope<Dashboard>) -> Html {
    let submission = dashboard.selected_submission();
    let title = submission.map(|s| s.title.clone()).unwrap_or_default();
    html! {
        <TopSheet node_ref={dashboard.detail_ref.clone()} {title} on_close={link.callback(|_| Msg::CloseDetail)}>
            if let Some(submission) = submission {
                { body(dashboard, submission, link) }
            }
        </TopSheet>
    }
}
