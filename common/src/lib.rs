//! Shared domain logic for the open data portal.
//!
//! Everything in this crate is synchronous and free of I/O so the same code
//! runs inside the wasm frontend and in native tests.

pub mod chart;
pub mod error;
pub mod listing;
pub mod model;
pub mod requests;
pub mod review;
pub mod session;
pub mod statistics;
pub mod upload;
