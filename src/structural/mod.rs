//! Structural patterns: composing objects and interfaces.

pub mod adapter;
pub mod composite;
