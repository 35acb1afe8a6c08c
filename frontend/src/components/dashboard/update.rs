use gloo_console::error;
use yew::prelude::*;

use common::requests::CreateCategoryRequest;

use super::messages::Msg;
use super::state::{toggle, Dashboard, Draft};
use crate::helpers::{show_toast, ToastKind};
use crate::tops_sheet::{close_top_sheet, open_top_sheet};

const NOTICE_MS: u32 = 5000;
const CATEGORY_CREATED: &str =
    "Category created successfully! It will now appear in the categories list.";
const UPDATE_FAILED: &str = "Failed to update submission. Please try again or contact support.";

fn notify(dashboard: &mut Dashboard, ctx: &Context<Dashboard>, success: Option<String>, error: Option<String>) {
    dashboard.notice += 1;
    dashboard.success = success;
    dashboard.error = error;
    let notice = dashboard.notice;
    ctx.link().send_future(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_MS).await;
        Msg::DismissNotice(notice)
    });
}

pub fn update(dashboard: &mut Dashboard, ctx: &Context<Dashboard>, msg: Msg) -> bool {
    let api = ctx.props().api.clone();
    match msg {
        Msg::Load => {
            dashboard.loading = true;
            let options_api = api.clone();
            ctx.link()
                .send_future(async move { Msg::Loaded(api.fetch_contributions().await) });
            ctx.link().send_future(async move {
                let categories = options_api.fetch_categories().await;
                let tags = options_api.fetch_tags().await;
                Msg::OptionsLoaded(categories, tags)
            });
            true
        }
        Msg::Loaded(Ok(records)) => {
            let filter = dashboard.queue.filter;
            dashboard.queue = common::review::ReviewQueue::from_records(&records);
            dashboard.queue.set_filter(filter);
            dashboard.loading = false;
            true
        }
        Msg::Loaded(Err(err)) => {
            error!(format!("dashboard: {err}"));
            dashboard.loading = false;
            dashboard.error = Some(format!("Could not load submissions: {err}"));
            true
        }
        Msg::OptionsLoaded(categories, tags) => {
            match categories {
                Ok(categories) => dashboard.categories = categories,
                Err(err) => error!(format!("categories: {err}")),
            }
            match tags {
                Ok(tags) => dashboard.tags = tags,
                Err(err) => error!(format!("tags: {err}")),
            }
            true
        }
        Msg::SetFilter(filter) => {
            dashboard.queue.set_filter(filter);
            true
        }
        Msg::SetPage(page) => {
            dashboard.queue.set_page(page);
            true
        }

        Msg::OpenDetail(id) => {
            let Some(submission) = dashboard.queue.get(id) else {
                return false;
            };
            dashboard.draft = Draft::of(submission);
            dashboard.selected = Some(id);
            dashboard.proposal = None;
            open_top_sheet(dashboard.detail_ref.clone());
            true
        }
        Msg::CloseDetail => {
            close_top_sheet(dashboard.detail_ref.clone());
            dashboard.selected = None;
            dashboard.proposal = None;
            true
        }
        Msg::ToggleCategory(label) => {
            toggle(&mut dashboard.draft.categories, label);
            true
        }
        Msg::ToggleTag(label) => {
            toggle(&mut dashboard.draft.tags, label);
            true
        }
        Msg::Propose(update) => {
            dashboard.proposal = Some(update);
            true
        }
        Msg::CancelProposal => {
            dashboard.proposal = None;
            true
        }
        Msg::Confirm => {
            let (Some(id), Some(update)) = (dashboard.selected, dashboard.proposal.take()) else {
                return false;
            };
            dashboard.saving = true;
            let request = update.to_request();
            ctx.link().send_future(async move {
                let result = api.update_contribution(id, &request).await.map(|_| ());
                Msg::Updated(id, update, result)
            });
            true
        }
        Msg::Updated(id, update, Ok(())) => {
            dashboard.saving = false;
            match dashboard.queue.apply_update(id, &update) {
                Ok(message) => {
                    show_toast(message, ToastKind::Success);
                    notify(dashboard, ctx, Some(message.to_string()), None);
                }
                Err(err) => error!(err.to_string()),
            }
            if let Some(submission) = dashboard.queue.get(id) {
                dashboard.draft = Draft::of(submission);
            }
            true
        }
        Msg::Updated(id, _, Err(err)) => {
            error!(format!("updating submission {id}: {err}"));
            dashboard.saving = false;
            show_toast(UPDATE_FAILED, ToastKind::Error);
            notify(dashboard, ctx, None, Some(UPDATE_FAILED.to_string()));
            true
        }
        Msg::DismissNotice(notice) => {
            if notice != dashboard.notice {
                return false;
            }
            dashboard.success = None;
            dashboard.error = None;
            true
        }

        Msg::OpenAddCategory => {
            dashboard.new_category = Dashboard::blank_category();
            dashboard.icon_search.clear();
            dashboard.category_error = None;
            open_top_sheet(dashboard.category_ref.clone());
            true
        }
        Msg::CloseAddCategory => {
            close_top_sheet(dashboard.category_ref.clone());
            false
        }
        Msg::SetCategoryName(name) => {
            dashboard.new_category.name = name;
            true
        }
        Msg::SetCategoryIcon(icon) => {
            dashboard.new_category.icon = icon;
            true
        }
        Msg::SetCategoryDescription(description) => {
            dashboard.new_category.description = Some(description);
            true
        }
        Msg::SetIconSearch(search) => {
            dashboard.icon_search = search;
            true
        }
        Msg::CreateCategory => {
            let name = dashboard.new_category.name.trim().to_string();
            if name.is_empty() {
                dashboard.category_error = Some("Category name is required.".to_string());
                return true;
            }
            let payload = CreateCategoryRequest {
                name,
                icon: dashboard.new_category.icon.clone(),
                description: dashboard
                    .new_category
                    .description
                    .as_deref()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string),
            };
            dashboard.creating_category = true;
            dashboard.category_error = None;
            ctx.link().send_future(async move {
                Msg::CategoryCreated(api.create_category(&payload).await)
            });
            true
        }
        Msg::CategoryCreated(Ok(response)) => {
            dashboard.creating_category = false;
            dashboard.categories.push(response.category);
            dashboard.categories.sort_by(|a, b| a.name.cmp(&b.name));
            close_top_sheet(dashboard.category_ref.clone());
            show_toast(CATEGORY_CREATED, ToastKind::Success);
            notify(dashboard, ctx, Some(CATEGORY_CREATED.to_string()), None);
            true
        }
        Msg::CategoryCreated(Err(err)) => {
            error!(format!("creating category: {err}"));
            dashboard.creating_category = false;
            dashboard.category_error = Some(err.to_string());
            true
        }
    }
}

