//! Dataset detail page: metadata, attached resources with download links,
//! API endpoint, and an on-demand chart plus preview of the decoded rows.

use gloo_console::error;
use yew::prelude::*;

use common::error::ApiError;
use common::model::dataset::DatasetRecord;
use common::model::table::FileData;

mod chart;
mod view;

use crate::api::Api;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct DetailProps {
    pub api: Api,
    pub id: u64,
    pub on_navigate: Callback<Route>,
}

pub enum Msg {
    Loaded(Result<DatasetRecord, ApiError>),
    /// Fetch and show the rows of a resource; the first one when `None`.
    ShowChart(Option<u64>),
    ChartLoaded(Option<u64>, Result<FileData, ApiError>),
    HideChart,
}

pub struct DatasetDetail {
    pub record: Option<DatasetRecord>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub file_data: Option<FileData>,
    pub selected_file: Option<u64>,
    pub chart_loading: bool,
    pub chart_error: Option<String>,
    pub chart_open: bool,
}

impl Component for DatasetDetail {
    type Message = Msg;
    type Properties = DetailProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx.props().api.clone();
        let id = ctx.props().id;
        ctx.link()
            .send_future(async move { Msg::Loaded(api.fetch_approved(id).await) });
        Self {
            record: None,
            loading: true,
            error: None,
            file_data: None,
            selected_file: None,
            chart_loading: false,
            chart_error: None,
            chart_open: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(record) => self.record = Some(record),
                    Err(err) => {
                        error!(format!("dataset {}: {err}", ctx.props().id));
                        self.error = Some(err);
                    }
                }
                true
            }
            Msg::ShowChart(file_id) => {
                self.chart_open = true;
                if self.file_data.is_some() && self.selected_file == file_id {
                    return true;
                }
                self.chart_loading = true;
                self.chart_error = None;
                self.selected_file = file_id;
                let api = ctx.props().api.clone();
                let id = ctx.props().id;
                ctx.link().send_future(async move {
                    Msg::ChartLoaded(file_id, api.fetch_file_data(id, file_id).await)
                });
                true
            }
            Msg::ChartLoaded(file_id, _) if file_id != self.selected_file => false,
            Msg::ChartLoaded(_, result) => {
                self.chart_loading = false;
                match result {
                    Ok(data) => self.file_data = Some(data),
                    Err(err) => {
                        self.file_data = None;
                        self.chart_error = Some(format!("Could not load the data: {err}"));
                    }
                }
                true
            }
            Msg::HideChart => {
                self.chart_open = false;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
