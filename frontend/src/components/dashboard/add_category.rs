use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::category::CategoryIcon;

use super::messages::Msg;
use super::state::Dashboard;
use crate::tops_sheet::TopSheet;

fn icon_grid(dashboard: &Dashboard, link: &Scope<Dashboard>) -> Html {
    let search = dashboard.icon_search.to_lowercase();
    let icons = CategoryIcon::ALL
        .into_iter()
        .filter(|icon| icon.name().to_lowercase().contains(&search));
    html! {
        <div class="icon-grid">
            { for icons.map(|icon| {
                let selected = dashboard.new_category.icon == icon.name();
                html! {
                    <button
                        type="button"
                        title={icon.name()}
                        class={classes!("btn", selected.then_some("current"))}
                        onclick={link.callback(move |_| Msg::SetCategoryIcon(icon.name().to_string()))}
                    >
                        <span class="material-icons">{ icon.material_icon() }</span>
                    </button>
                }
            }) }
        </div>
    }
}

pub fn add_category_sheet(dashboard: &Dashboard, link: &Scope<Dashboard>) -> Html {
    let category = &dashboard.new_category;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::CreateCategory
    });
    let on_name = link.callback(|e: InputEvent| {
        Msg::SetCategoryName(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_description = link.callback(|e: InputEvent| {
        Msg::SetCategoryDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
    });
    let on_search = link.callback(|e: InputEvent| {
        Msg::SetIconSearch(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let selected_icon = CategoryIcon::from_name(&category.icon);

    html! {
        <TopSheet
            node_ref={dashboard.category_ref.clone()}
            title="Add New Category"
            on_close={link.callback(|_| Msg::CloseAddCategory)}
        >
            <p class="muted">{"Create a new category for organizing datasets"}</p>
            <form {onsubmit}>
                <div class="field">
                    <label>{"Name"}</label>
                    <input type="text" value={category.name.clone()} oninput={on_name} placeholder="e.g. Agriculture" />
                </div>
                <div class="field">
                    <label>{"Description"}</label>
                    <textarea rows="3" value={category.description.clone().unwrap_or_default()} oninput={on_description} />
                </div>
                <div class="field">
                    <label>
                        {"Icon "}
                        <span class="material-icons">{ selected_icon.material_icon() }</span>
                        { format!(" {}", selected_icon.name()) }
                    </label>
                    <input type="search" placeholder="Search icons" value={dashboard.icon_search.clone()} oninput={on_search} />
                    { icon_grid(dashboard, link) }
                </div>
                if let Some(err) = &dashboard.category_error {
                    <div class="alert error">{ err.clone() }</div>
                }
                <button type="submit" class="btn primary" disabled={dashboard.creating_category}>
                    { if dashboard.creating_category { "Creating…" } else { "Create category" } }
                </button>
            </form>
        </TopSheet>
    }
}
