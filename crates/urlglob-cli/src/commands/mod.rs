//! CLI command implementations

pub mod expand;
pub mod json_output;
pub mod requests;
