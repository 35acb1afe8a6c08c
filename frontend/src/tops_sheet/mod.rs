//! Sheet that slides down from the top of the viewport; used for the
//! dashboard's submission detail and add-category dialogs.

use uuid::Uuid;
use yew::{html, Callback, Component, Context, Html, NodeRef, Properties};

const SHOWN: &str = "show";

pub struct TopSheet {
    id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: String,
    pub on_close: Callback<()>,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let on_close = props.on_close.reform(|_| ());
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()} role="dialog">
                <div class="top-sheet-header">
                    <h3>{ props.title.clone() }</h3>
                    <button class="btn" onclick={on_close} aria-label="Close">
                        <span class="material-icons">{"close"}</span>
                    </button>
                </div>
                { props.children.clone() }
            </div>
        }
    }
}

fn set_shown(sheet: &NodeRef, shown: bool) {
    if let Some(element) = sheet.cast::<web_sys::HtmlElement>() {
        let classes = element.class_list();
        if shown {
            classes.add_1(SHOWN).ok();
        } else {
            classes.remove_1(SHOWN).ok();
        }
    }
}

/// Slides the sheet in once the browser has painted it, so the transition
/// runs even when the content was just rendered.
pub fn open_top_sheet(sheet: NodeRef) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        set_shown(&sheet, true);
    });
}

pub fn close_top_sheet(sheet: NodeRef) {
    set_shown(&sheet, false);
}
