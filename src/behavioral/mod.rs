//! Behavioral patterns: how objects share work.

pub mod strategy;
