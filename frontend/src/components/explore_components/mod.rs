//! Explore-cases table and its controls.

pub mod explore_cases_table;
pub mod table_actions;
pub mod table_export;
pub mod pagination_controls;
