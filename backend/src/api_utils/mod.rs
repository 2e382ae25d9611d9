//! Data API client and response types.

pub mod gdc_client;
pub mod api_types;
