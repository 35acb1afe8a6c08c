use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::dataset::RequestType;
use common::upload::format_file_size;

use super::messages::{Field, Msg};
use super::state::ContributePage;
use crate::helpers::route_link;
use crate::routes::Route;

fn text_input(page: &ContributePage, link: &Scope<ContributePage>, field: Field, kind: &'static str, placeholder: &'static str, disabled: bool) -> Html {
    let oninput = link.callback(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetField(field, input.value())
    });
    html! {
        <input type={kind} {placeholder} value={page.field(field)} {oninput} {disabled} />
    }
}

fn file_list(page: &ContributePage, link: &Scope<ContributePage>) -> Html {
    let candidates = ContributePage::candidates(&page.files);
    html! {
        <ul class="file-list">
            { for candidates.into_iter().enumerate().map(|(index, file)| html! {
                <li>
                    <span class="material-icons">{"insert_drive_file"}</span>
                    { format!("{} ({})", file.name, format_file_size(file.size)) }
                    <button type="button" class="btn danger" onclick={link.callback(move |_| Msg::RemoveFile(index))}>
                        <span class="material-icons">{"close"}</span>
                    </button>
                </li>
            }) }
        </ul>
    }
}

pub fn view(page: &ContributePage, ctx: &Context<ContributePage>) -> Html {
    let link = ctx.link();
    let signed_in = ctx.props().session.is_authenticated();
    let disabled = !signed_in || page.submitting;

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_type = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SetField(Field::RequestType, select.value())
    });
    let on_message = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetField(Field::Message, area.value())
    });
    let on_files = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input
            .files()
            .map(|list| {
                (0..list.length()).filter_map(|i| list.get(i)).collect()
            })
            .unwrap_or_default();
        Msg::FilesSelected(files)
    });

    html! {
        <div class="page">
            <h1>{"Contribute"}</h1>
            <p>{"Share a dataset, request one, report an issue or send us feedback."}</p>
            <form class="contribute-form" {onsubmit}>
                <div class="field">
                    <label>{"Title"}</label>
                    { text_input(page, link, Field::Title, "text", "Short title of your submission", disabled) }
                </div>
                <div class="field">
                    <label>{"Name"}</label>
                    { text_input(page, link, Field::Name, "text", "Your full name", disabled) }
                </div>
                <div class="field">
                    <label>{"Email"}</label>
                    { text_input(page, link, Field::Email, "email", "you@example.com", disabled) }
                </div>
                <div class="field">
                    <label>{"Organization"}</label>
                    { text_input(page, link, Field::Organization, "text", "Your organization or agency", disabled) }
                </div>
                <div class="field">
                    <label>{"Request Type"}</label>
                    <select onchange={on_type} {disabled}>
                        <option value="" selected={page.form.request_type.is_empty()}>{"Select a type"}</option>
                        { for RequestType::ALL.into_iter().map(|t| html! {
                            <option value={t.value()} selected={page.form.request_type == t.value()}>{ t.label() }</option>
                        }) }
                    </select>
                </div>
                <div class="field">
                    <label>{"Message"}</label>
                    <textarea
                        rows="5"
                        placeholder="Describe your request or submission in detail..."
                        value={page.form.message.clone()}
                        oninput={on_message}
                        {disabled}
                    />
                </div>
                <div class="field">
                    <label>{"Files"}</label>
                    <input
                        type="file"
                        multiple={true}
                        hidden={true}
                        accept={page.policy.accept_attribute()}
                        ref={page.file_input_ref.clone()}
                        onchange={on_files}
                    />
                    <button type="button" class="btn" onclick={link.callback(|_| Msg::OpenFilePicker)} {disabled}>
                        <span class="material-icons">{"upload_file"}</span>
                        {"Attach files"}
                    </button>
                    <small class="muted">
                        { format!(
                            "Up to {} files, {} each. Accepted: {}",
                            page.policy.max_files,
                            format_file_size(page.policy.max_file_bytes),
                            page.policy.accept_attribute()
                        ) }
                    </small>
                    { file_list(page, link) }
                    if let Some(err) = &page.file_error {
                        <div class="alert error">{ err.clone() }</div>
                    }
                </div>

                if let Some(err) = &page.error {
                    <div class="alert error">{ err.clone() }</div>
                }
                if let Some(success) = &page.success {
                    <div class="alert success">{ success.clone() }</div>
                }

                <button type="submit" class="btn primary" {disabled}>
                    if !signed_in {
                        <span class="material-icons">{"login"}</span>{"Sign in to submit"}
                    } else if page.submitting {
                        {"Submitting..."}
                    } else {
                        <span class="material-icons">{"send"}</span>{"Submit Request"}
                    }
                </button>
                if !signed_in {
                    <div class="muted">
                        <span class="chip tag">{"Not signed in"}</span>
                        { route_link(Route::Login, &ctx.props().on_navigate, classes!(), html! {"Go to login"}) }
                    </div>
                }
            </form>
        </div>
    }
}
