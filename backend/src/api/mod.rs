//! Backend API modules.

pub mod cases;
pub mod mutations;
