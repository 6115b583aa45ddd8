//! Common helpers and wire types shared across `onion-router` crates.

pub mod protocol;
pub mod validation;

pub use validation::NullOrEmpty;
