// Singleton Pattern - Identity Registry backed by OnceLock
//
// The instance can only be reached through `Singleton::instance()`; there is
// no public constructor, no `Clone`, and deserialization is refused.
// Statics must be `Sync`, so the slot is a `OnceLock`; nothing else is locked.

use crate::error::PatternError;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

// ============================================================================
// Identity Registry
// ============================================================================

/// A write-once slot for a single value of `T`.
///
/// The first call to [`IdentityRegistry::get_or_init`] runs the initializer and
/// stores the result; every later call returns a reference to that same value.
/// The slot is never replaced or cleared. Statics live for the whole process;
/// tests create their own registries to stay isolated from each other.
pub struct IdentityRegistry<T> {
    slot: OnceLock<T>,
    inits: AtomicUsize,
}

impl<T> IdentityRegistry<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
            inits: AtomicUsize::new(0),
        }
    }

    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.slot.get_or_init(|| {
            let value = init();
            self.inits.fetch_add(1, Ordering::SeqCst);
            value
        })
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    /// How many times an initializer completed and filled the slot. Never
    /// exceeds 1; an initializer that panics leaves the slot empty and uncounted.
    pub fn init_count(&self) -> usize {
        self.inits.load(Ordering::SeqCst)
    }
}

impl<T> Default for IdentityRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Designated singleton type
// ============================================================================

static INSTANCE: IdentityRegistry<Singleton> = IdentityRegistry::new();

#[derive(Debug, Serialize)]
pub struct Singleton {
    created_at: u64,
}

impl Singleton {
    const TYPE_NAME: &'static str = "Singleton";

    fn new() -> Self {
        let created_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        tracing::info!(created_at, "creating singleton instance");
        Self { created_at }
    }

    /// Returns the process-wide instance, creating it on first use.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(Singleton::new)
    }

    /// The registry holding the process-wide instance.
    pub fn registry() -> &'static IdentityRegistry<Singleton> {
        &INSTANCE
    }

    /// Seconds since the Unix epoch at which the instance was created.
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    pub fn log(&self) -> String {
        format!("Singleton instance at: {}", self.created_at)
    }

    pub fn business_logic(&self) -> String {
        "Here we implement business logic like Database.".to_string()
    }
}

impl<'de> Deserialize<'de> for Singleton {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Err(serde::de::Error::custom(PatternError::reserved(
            "unserialize",
            Self::TYPE_NAME,
        )))
    }
}

// ============================================================================
// Tests
// ============================================================================
