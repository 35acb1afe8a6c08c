//! Category browse pages: the grid of all categories and the datasets filed
//! under one of them.

mod detail;
mod grid;

pub use detail::CategoryPage;
pub use grid::CategoriesPage;
