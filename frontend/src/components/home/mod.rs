//! Landing page: catalogue search, portal figures, recent datasets and the
//! contributor leaderboard.

use gloo_console::error;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::error::ApiError;
use common::listing::{sort_records, SortKey};
use common::model::dataset::DatasetRecord;
use common::statistics::{ranking, DatasetStatistics, LeaderboardItem, RankingEntry};

mod sections;

use crate::api::Api;
use crate::routes::Route;

const RECENT_DATASETS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub api: Api,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    DatasetsLoaded(Result<Vec<DatasetRecord>, ApiError>),
    LeaderboardLoaded(Result<Vec<LeaderboardItem>, ApiError>),
    SetSearch(String),
    Search,
}

pub struct HomePage {
    search: String,
    statistics: Option<DatasetStatistics>,
    recent: Vec<DatasetRecord>,
    leaderboard: Option<Vec<RankingEntry>>,
    datasets_error: Option<String>,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = HomeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let leaderboard_api = api.clone();
        ctx.link()
            .send_future(async move { Msg::DatasetsLoaded(api.fetch_all_approved().await) });
        ctx.link().send_future(async move {
            Msg::LeaderboardLoaded(leaderboard_api.fetch_leaderboard().await)
        });
        Self {
            search: String::new(),
            statistics: None,
            recent: Vec::new(),
            leaderboard: None,
            datasets_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::DatasetsLoaded(Ok(records)) => {
                self.statistics = Some(DatasetStatistics::from_records(&records));
                let mut recent: Vec<&DatasetRecord> = records.iter().collect();
                sort_records(&mut recent, SortKey::Recent);
                self.recent = recent
                    .into_iter()
                    .take(RECENT_DATASETS)
                    .cloned()
                    .collect();
                true
            }
            Msg::DatasetsLoaded(Err(err)) => {
                error!(format!("home: {err}"));
                self.datasets_error = Some(err.to_string());
                true
            }
            Msg::LeaderboardLoaded(result) => {
                self.leaderboard = Some(match result {
                    Ok(items) => ranking(&items),
                    Err(err) => {
                        error!(format!("leaderboard: {err}"));
                        Vec::new()
                    }
                });
                true
            }
            Msg::SetSearch(search) => {
                self.search = search;
                false
            }
            Msg::Search => {
                ctx.props().on_navigate.emit(Route::Datasets {
                    query: self.search.trim().to_string(),
                });
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Search
        });
        let oninput = link.callback(|e: InputEvent| {
            Msg::SetSearch(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_navigate = &ctx.props().on_navigate;

        html! {
            <div class="page home">
                <section class="hero">
                    <h1>{"Tarlac Open Data Portal"}</h1>
                    <p>{"Find, explore and download public datasets from the Province of Tarlac."}</p>
                    <form class="search" {onsubmit}>
                        <input type="search" placeholder="Search datasets…" value={self.search.clone()} {oninput} />
                        <button type="submit" class="btn primary">
                            <span class="material-icons">{"search"}</span>{"Search"}
                        </button>
                    </form>
                </section>
                { sections::statistics(self.statistics.as_ref(), self.datasets_error.as_deref()) }
                { sections::recent_datasets(&self.recent, on_navigate) }
                { sections::leaderboard(self.leaderboard.as_deref()) }
            </div>
        }
    }
}
