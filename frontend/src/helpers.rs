//! Small view helpers shared by the pages.

use num_format::{Locale, ToFormattedString};
use pulldown_cmark::{html, Event, Parser};
use regex::Regex;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::routes::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

impl ToastKind {
    fn background(&self) -> &'static str {
        match self {
            ToastKind::Info => "rgba(0, 0, 0, 0.8)",
            ToastKind::Success => "rgba(21, 128, 61, 0.95)",
            ToastKind::Error => "rgba(185, 28, 28, 0.95)",
        }
    }
}

/// Shows a temporary notification at the bottom of the screen. It removes
/// itself after three seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let toast: HtmlElement = toast.unchecked_into();
        let style = toast.style();
        for (property, value) in [
            ("position", "fixed"),
            ("bottom", "20px"),
            ("left", "50%"),
            ("transform", "translateX(-50%)"),
            ("background", kind.background()),
            ("color", "#fff"),
            ("padding", "10px 20px"),
            ("border-radius", "4px"),
            ("z-index", "10000"),
            ("font-family", "Arial, sans-serif"),
        ] {
            style.set_property(property, value).ok();
        }

        if body.append_child(&toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(3000).await;
                if let Some(parent) = toast.parent_node() {
                    parent.remove_child(&toast).ok();
                }
            });
        }
    }
}

/// Markdown to HTML for contribution descriptions. Raw HTML in the source
/// is rendered as text.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

pub fn markdown_html(source: &str) -> Html {
    Html::from_html_unchecked(AttrValue::from(render_markdown(source)))
}

pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
        .map(|re| re.is_match(email.trim()))
        .unwrap_or(false)
}

pub fn format_count(value: usize) -> String {
    value.to_formatted_string(&Locale::en)
}

/// An anchor that navigates through `on_navigate` instead of reloading the
/// page; middle-click and new-tab keep working through `href`.
pub fn route_link(route: Route, on_navigate: &Callback<Route>, classes: Classes, children: Html) -> Html {
    let href = route.path();
    let on_navigate = on_navigate.clone();
    let onclick = Callback::from(move |e: MouseEvent| {
        if e.ctrl_key() || e.meta_key() || e.button() != 0 {
            return;
        }
        e.prevent_default();
        on_navigate.emit(route.clone());
    });
    html! {
        <a {href} class={classes} {onclick}>{ children }</a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_escapes_raw_html() {
        let html = render_markdown("**Flood** map <script>alert(1)</script>");
        assert!(html.contains("<strong>Flood</strong>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("admin@tarlac.gov.ph"));
        assert!(!is_valid_email("admin@tarlac"));
        assert!(!is_valid_email("not an email"));
    }

    #[test]
    fn counts_use_thousands_separators() {
        assert_eq!(format_count(1234567), "1,234,567");
    }
}
