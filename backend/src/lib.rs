//! Server-side access to the genomic data API.

pub mod api;
pub mod api_utils;
pub mod server_extra;
