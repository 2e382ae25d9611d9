//! Routed pages.

pub mod home_page;
pub mod case_page;
pub mod explore_page;
