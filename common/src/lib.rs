//! Models and view logic shared between frontend and backend.

extern crate serde;


pub mod filters;
pub mod uri;
pub mod query;
pub mod portal_const;
pub mod case_record;
pub mod summary;
pub mod cart;
pub mod case_view;
pub mod clinical;
pub mod explore_table;
pub mod table_columns;
pub mod case_sets;
pub mod pagination;
pub mod export;
