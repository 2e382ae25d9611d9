//! Somatic mutation aggregations.

mod ssm_case_counts;
pub use ssm_case_counts::fetch_ssm_case_counts;

mod frequent_mutations;
pub use frequent_mutations::fetch_frequent_mutations;
