//! Public dataset catalogue: the filterable listing and the detail page.

pub mod card;
pub mod detail;
pub mod listing;
