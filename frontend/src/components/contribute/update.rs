use gloo_console::error;
use yew::prelude::*;

use common::error::ApiError;

use super::messages::Msg;
use super::state::ContributePage;
use crate::helpers::{is_valid_email, show_toast, ToastKind};

const SUBMITTED: &str = "Contribution submitted successfully. Thank you!";

pub fn update(page: &mut ContributePage, ctx: &Context<ContributePage>, msg: Msg) -> bool {
    match msg {
        Msg::SetField(field, value) => {
            page.set_field(field, value);
            page.error = None;
            true
        }
        Msg::OpenFilePicker => {
            if let Some(input) = page.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.click();
            }
            false
        }
        Msg::FilesSelected(selected) => {
            let mut files = page.files.clone();
            files.extend(selected);
            match page.policy.validate(&ContributePage::candidates(&files)) {
                Ok(()) => {
                    page.files = files;
                    page.file_error = None;
                }
                Err(err) => page.file_error = Some(err.to_string()),
            }
            // Lets the same file be picked again after removal.
            if let Some(input) = page.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                input.set_value("");
            }
            true
        }
        Msg::RemoveFile(index) => {
            if index < page.files.len() {
                page.files.remove(index);
                page.file_error = None;
            }
            true
        }
        Msg::Submit => {
            if page.submitting {
                return false;
            }
            page.success = None;
            if !ctx.props().session.is_authenticated() {
                page.error = Some(ApiError::Unauthenticated.to_string());
                return true;
            }
            let payload = match page.form.clone().validate() {
                Ok(payload) => payload,
                Err(message) => {
                    page.error = Some(message);
                    return true;
                }
            };
            if let Some(email) = &payload.email {
                if !is_valid_email(email) {
                    page.error = Some("Please enter a valid email address.".to_string());
                    return true;
                }
            }
            if let Err(err) = page.policy.validate(&ContributePage::candidates(&page.files)) {
                page.file_error = Some(err.to_string());
                return true;
            }

            page.error = None;
            page.submitting = true;
            let api = ctx.props().api.clone();
            let files = page.files.clone();
            ctx.link().send_future(async move {
                Msg::Submitted(api.submit_contribution(&payload, &files).await.map(|_| ()))
            });
            true
        }
        Msg::Submitted(Ok(())) => {
            page.submitting = false;
            page.reset();
            page.success = Some(SUBMITTED.to_string());
            show_toast(SUBMITTED, ToastKind::Success);
            true
        }
        Msg::Submitted(Err(err)) => {
            error!(format!("contribution: {err}"));
            page.submitting = false;
            page.error = Some(err.to_string());
            true
        }
    }
}
