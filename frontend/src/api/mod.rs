//! Server functions.

pub mod portal_api;
