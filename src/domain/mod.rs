//! Domain logic - pure version resolution rules independent of git access

pub mod classify;
pub mod resolve;
pub mod version;

pub use classify::Classifier;
pub use resolve::{Resolution, Resolver, Step};
pub use version::{BumpCategory, Version};
