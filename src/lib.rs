//! # Design Patterns Catalogue
//!
//! Small, self-contained examples of classic design patterns written the
//! Rust way.
//!
//! ## Creational Patterns
//! - Singleton (`OnceLock`-backed identity registry, hidden constructor)
//! - Builder (mutable fluent builder)
//! - Prototype (`Clone`)
//! - Factory (simple factory, factory method, abstract factory)
//!
//! ## Structural Patterns
//! - Adapter (trait objects over a JSON client)
//! - Composite (file system tree)
//!
//! ## Behavioral Patterns
//! - Strategy (swappable payment methods)
//!
//! Run individual examples with:
//! ```bash
//! cargo run --bin singleton
//! cargo run --bin builder
//! cargo run --bin prototype
//! cargo run --bin factory
//! cargo run --bin strategy
//! cargo run --bin composite
//! cargo run --bin adapter
//! ```
//!
//! Each binary reads an optional `patterns.toml` from the working directory
//! (see [`config::DemoConfig`]) and logs to stderr; set `RUST_LOG=debug` to
//! watch the objects being constructed.

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod demo;
pub mod error;
pub mod structural;

pub use config::DemoConfig;
pub use error::{PatternError, Result};
