//! Shared utilities.

pub mod db_error;
pub mod url_validator;
