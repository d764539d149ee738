// Prototype Pattern with Clone
// All fields are owned values, so the derived `Clone` is a full
// field-by-field copy: shallow and deep cloning are the same thing here.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,
    pub email: String,
    pub role: String,
    pub country: String,
}

impl Member {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: role.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Email: {}, Role: {}, Country: {}",
            self.name, self.email, self.role, self.country
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Car {
    pub brand: String,
    pub color: String,
}

impl Car {
    pub fn new(brand: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            color: color.into(),
        }
    }

    pub fn drive(&self) -> String {
        format!("Driving a {} {}", self.color, self.brand)
    }
}

/// Produces an independent copy of a prototype value.
pub fn clone_from_prototype<T: Clone + fmt::Debug>(prototype: &T) -> T {
    tracing::debug!(?prototype, "cloning prototype");
    prototype.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn alice() -> Member {
        Member::new("Alice", "alice@example.com", "Manager", "IN")
    }

    #[test]
    fn test_clone_then_modify() {
        let original = alice();
        let mut copy = clone_from_prototype(&original);
        copy.name = "Bob".to_string();
        copy.email = "bob@example.com".to_string();

        assert_eq!(
            original.to_string(),
            "Name: Alice, Email: alice@example.com, Role: Manager, Country: IN"
        );
        assert_eq!(
            copy.to_string(),
            "Name: Bob, Email: bob@example.com, Role: Manager, Country: IN"
        );
    }

    #[test]
    fn test_clone_is_distinct_value() {
        let original = alice();
        let copy = clone_from_prototype(&original);
        assert_eq!(original, copy);
        assert!(!std::ptr::eq(&original, &copy));
        assert_ne!(original.name.as_ptr(), copy.name.as_ptr());
    }

    #[test]
    fn test_mutating_original_leaves_clone() {
        let mut original = alice();
        let copy = original.clone();
        original.country.push_str("-MH");
        assert_eq!(copy.country, "IN");
    }

    #[test]
    fn test_member_prototype_from_json() {
        let prototype: Member = serde_json::from_str(
            r#"{"name":"Alice","email":"alice@example.com","role":"Manager","country":"IN"}"#,
        )
        .unwrap();
        let mut copy = clone_from_prototype(&prototype);
        copy.role = "Engineer".to_string();

        assert_eq!(prototype, alice());
        let json = serde_json::to_value(&copy).unwrap();
        assert_eq!(json["role"], "Engineer");
        assert_eq!(json["name"], "Alice");
    }

    #[test]
    fn test_car_clone() {
        let car1 = Car::new("Tesla", "white");
        let mut car2 = clone_from_prototype(&car1);
        car2.color = "black".to_string();

        assert_eq!(car1.drive(), "Driving a white Tesla");
        assert_eq!(car2.drive(), "Driving a black Tesla");
    }

    #[test]
    fn test_default_member_is_blank() {
        assert_eq!(
            Member::default().to_string(),
            "Name: , Email: , Role: , Country: "
        );
    }

    proptest! {
        #[test]
        fn prop_clone_matches_then_diverges(
            name in ".{0,16}",
            email in ".{0,16}",
            role in ".{0,16}",
            country in "[A-Z]{2}",
            new_name in ".{0,16}",
        ) {
            let original = Member::new(name.clone(), email, role, country);
            let mut copy = clone_from_prototype(&original);
            prop_assert_eq!(&copy, &original);

            copy.name = new_name.clone();
            prop_assert_eq!(&original.name, &name);
            prop_assert_eq!(&copy.name, &new_name);
        }
    }
}
