pub mod categories;
pub mod contribute;
pub mod dashboard;
pub mod datasets;
pub mod home;
pub mod layout;
pub mod login;
pub mod pager;
