pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod publisher;
pub mod store;
pub mod ui;

pub use error::{AutoverError, Result};
