use crate::app::App;

mod api;
mod app;
mod components;
mod helpers;
mod routes;
mod storage;
mod tops_sheet;

fn main() {
    yew::Renderer::<App>::new().render();
}
