//! UI components.

pub mod navbar;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod notify;
pub mod case_components;
pub mod explore_components;
