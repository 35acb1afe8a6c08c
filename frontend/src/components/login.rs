use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::error::ApiError;
use common::requests::{LoginRequest, LoginResponse};
use common::session::Session;

use crate::api::Api;
use crate::helpers::{is_valid_email, route_link};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub api: Api,
    pub on_signed_in: Callback<Session>,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    SetEmail(String),
    SetPassword(String),
    ToggleRemember,
    TogglePasswordVisible,
    Submit,
    Answered(Result<LoginResponse, ApiError>),
}

pub struct LoginPage {
    form: LoginRequest,
    show_password: bool,
    submitting: bool,
    error: Option<String>,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = LoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LoginRequest::default(),
            show_password: false,
            submitting: false,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetEmail(email) => {
                self.form.email = email;
                self.error = None;
                true
            }
            Msg::SetPassword(password) => {
                self.form.password = password;
                self.error = None;
                true
            }
            Msg::ToggleRemember => {
                self.form.remember = !self.form.remember;
                true
            }
            Msg::TogglePasswordVisible => {
                self.show_password = !self.show_password;
                true
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                if !is_valid_email(&self.form.email) {
                    self.error = Some("Please enter a valid email address.".to_string());
                    return true;
                }
                if self.form.password.is_empty() {
                    self.error = Some("Please enter your password.".to_string());
                    return true;
                }
                self.submitting = true;
                self.error = None;
                let api = ctx.props().api.clone();
                let payload = LoginRequest {
                    email: self.form.email.trim().to_string(),
                    ..self.form.clone()
                };
                ctx.link()
                    .send_future(async move { Msg::Answered(api.login(&payload).await) });
                true
            }
            Msg::Answered(result) => {
                self.submitting = false;
                match result.map(|response| Session::from_login(&response)) {
                    Ok(Some(session)) => {
                        self.form.password.clear();
                        ctx.props().on_signed_in.emit(session);
                    }
                    Ok(None) => {
                        self.error = Some("The server did not return an access token.".to_string());
                    }
                    Err(err) => {
                        error!(format!("login: {err}"));
                        self.error = Some(err.to_string());
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let on_email = link.callback(|e: InputEvent| {
            Msg::SetEmail(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_password = link.callback(|e: InputEvent| {
            Msg::SetPassword(e.target_unchecked_into::<HtmlInputElement>().value())
        });

        html! {
            <div class="page login">
                <h1>{"Sign in"}</h1>
                <p>{"Sign in to manage data requests and contribute datasets."}</p>
                <form {onsubmit}>
                    <div class="field">
                        <label>{"Email"}</label>
                        <input type="email" placeholder="you@example.com" value={self.form.email.clone()} oninput={on_email} />
                    </div>
                    <div class="field">
                        <label>{"Password"}</label>
                        <div class="password">
                            <input
                                type={if self.show_password { "text" } else { "password" }}
                                value={self.form.password.clone()}
                                oninput={on_password}
                            />
                            <button type="button" class="btn" onclick={link.callback(|_| Msg::TogglePasswordVisible)}>
                                <span class="material-icons">
                                    { if self.show_password { "visibility_off" } else { "visibility" } }
                                </span>
                            </button>
                        </div>
                    </div>
                    <label>
                        <input type="checkbox" checked={self.form.remember} onchange={link.callback(|_| Msg::ToggleRemember)} />
                        {" Remember me"}
                    </label>
                    if let Some(err) = &self.error {
                        <div class="alert error">{ err.clone() }</div>
                    }
                    <button type="submit" class="btn primary" disabled={self.submitting}>
                        { if self.submitting { "Signing in…" } else { "Sign in" } }
                    </button>
                </form>
                <p class="muted">
                    {"Just browsing? "}
                    { route_link(Route::datasets(), &ctx.props().on_navigate, classes!(), html! {"Explore the datasets"}) }
                </p>
            </div>
        }
    }
}
