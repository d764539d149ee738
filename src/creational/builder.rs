// Builder Pattern - Mutable Fluent Builder
// Setters take `&mut self` and return `&mut Self`; `build()` hands back the
// live record, so the builder can keep being used after it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendered in place of absent optional fields.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub age: Option<u32>,
    pub address: Option<String>,
}

impl User {
    /// Renders all fields, one per line, using `placeholder` for absent ones.
    pub fn display_with(&self, placeholder: &str) -> String {
        let age = self
            .age
            .map(|age| age.to_string())
            .unwrap_or_else(|| placeholder.to_string());
        let address = self.address.as_deref().unwrap_or(placeholder);
        format!(
            "Name: {}\nEmail: {}\nAge: {}\nAddress: {}",
            self.name, self.email, age, address
        )
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(PLACEHOLDER))
    }
}

/// Contract shared by builders that assemble a [`User`].
pub trait UserBuilderInterface {
    fn name(&mut self, name: impl Into<String>) -> &mut Self;
    fn email(&mut self, email: impl Into<String>) -> &mut Self;
    fn age(&mut self, age: u32) -> &mut Self;
    fn address(&mut self, address: impl Into<String>) -> &mut Self;
    fn build(&self) -> &User;
}

#[derive(Debug, Default)]
pub struct UserBuilder {
    user: User,
}

impl UserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the builder and returns the record it assembled.
    pub fn into_user(self) -> User {
        self.user
    }
}

impl UserBuilderInterface for UserBuilder {
    fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.user.name = name.into();
        tracing::debug!(name = %self.user.name, "builder: set name");
        self
    }

    fn email(&mut self, email: impl Into<String>) -> &mut Self {
        self.user.email = email.into();
        tracing::debug!(email = %self.user.email, "builder: set email");
        self
    }

    fn age(&mut self, age: u32) -> &mut Self {
        self.user.age = Some(age);
        tracing::debug!(age, "builder: set age");
        self
    }

    fn address(&mut self, address: impl Into<String>) -> &mut Self {
        let address = address.into();
        tracing::debug!(address = %address, "builder: set address");
        self.user.address = Some(address);
        self
    }

    // No copy: this is the record later setters keep mutating.
    fn build(&self) -> &User {
        &self.user
    }
}

// ============================================================================
// Tests
// ============================================================================
