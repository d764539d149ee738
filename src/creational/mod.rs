//! Creational patterns: object construction and identity.

pub mod builder;
pub mod factory;
pub mod prototype;
pub mod singleton;
