//! Cards and tables of the case page.

pub mod case_header;
pub mod entity_table;
pub mod summary_card;
pub mod clinical_card;
pub mod biospecimen_card;
pub mod frequent_mutations;
