//! Domain layer types and invariants.

pub mod email;
pub mod entities;
pub mod posts;
