use common::error::ApiError;
use common::listing::SortKey;
use common::model::dataset::DatasetRecord;

use super::state::Layout;

pub enum Msg {
    Load,
    Loaded(Result<Vec<DatasetRecord>, ApiError>),
    SetQuery(String),
    ToggleCategory(String),
    ToggleType(String),
    SetSort(SortKey),
    ClearFilters,
    GoToPage(usize),
    SetLayout(Layout),
    ToggleFilters,
}
