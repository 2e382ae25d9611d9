//! Route parameters and injected application state.

pub mod url_param;
pub mod portal_state;
