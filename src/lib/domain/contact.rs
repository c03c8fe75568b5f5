//! Contact-form modules

pub mod emails;
pub mod errors;
pub mod service;
pub mod submission;
