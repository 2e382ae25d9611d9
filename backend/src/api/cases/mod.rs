//! Case page, explore listing and export requests.

mod get_case_page;
pub use get_case_page::fetch_case_page;

mod list_explore_cases;
pub use list_explore_cases::fetch_explore_cases;

mod export_cases;
pub use export_cases::export_cases;
