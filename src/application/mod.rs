//! Application services layer.

pub mod error;
pub mod newsletter;
pub mod posts;
pub mod repos;
pub mod seed;
