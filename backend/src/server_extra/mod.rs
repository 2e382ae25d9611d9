//! Plain axum routes served next to the server functions.

pub mod export_cases;
