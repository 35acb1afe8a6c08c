use common::error::ApiError;
use common::model::category::Category;
use common::model::dataset::{DatasetRecord, Label};
use common::requests::CreateCategoryResponse;
use common::review::{ReviewUpdate, StatusFilter};

pub enum Msg {
    Load,
    Loaded(Result<Vec<DatasetRecord>, ApiError>),
    OptionsLoaded(Result<Vec<Category>, ApiError>, Result<Vec<Label>, ApiError>),
    SetFilter(StatusFilter),
    SetPage(usize),

    OpenDetail(u64),
    CloseDetail,
    ToggleCategory(Label),
    ToggleTag(Label),
    /// Asks for confirmation before sending the update.
    Propose(ReviewUpdate),
    CancelProposal,
    Confirm,
    Updated(u64, ReviewUpdate, Result<(), ApiError>),
    /// Clears banners raised by notice number `n` or earlier.
    DismissNotice(u32),

    OpenAddCategory,
    CloseAddCategory,
    SetCategoryName(String),
    SetCategoryIcon(String),
    SetCategoryDescription(String),
    SetIconSearch(String),
    CreateCategory,
    CategoryCreated(Result<CreateCategoryResponse, ApiError>),
}
