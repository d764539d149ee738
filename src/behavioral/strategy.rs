// Strategy Pattern with Trait Objects
// The cart can switch payment method at runtime.

use crate::error::{PatternError, Result};

pub trait PaymentStrategy {
    fn pay(&self, amount: u64) -> String;
    fn name(&self) -> &str;
}

pub struct CreditCardPayment;
impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Paid {} using Credit Card", amount)
    }

    fn name(&self) -> &str {
        "Credit Card"
    }
}

pub struct PaypalPayment;
impl PaymentStrategy for PaypalPayment {
    fn pay(&self, amount: u64) -> String {
        format!("Paid {} using PayPal", amount)
    }

    fn name(&self) -> &str {
        "PayPal"
    }
}

#[derive(Default)]
pub struct ShoppingCart {
    payment_method: Option<Box<dyn PaymentStrategy>>,
}

impl ShoppingCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_payment_method(&mut self, method: Box<dyn PaymentStrategy>) {
        tracing::debug!(method = method.name(), "strategy: payment method selected");
        self.payment_method = Some(method);
    }

    pub fn payment_method_name(&self) -> Option<&str> {
        self.payment_method.as_deref().map(|method| method.name())
    }

    pub fn checkout(&self, amount: u64) -> Result<String> {
        let method = self
            .payment_method
            .as_deref()
            .ok_or(PatternError::NoPaymentMethod { amount })?;
        Ok(method.pay(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkout_without_method() {
        let cart = ShoppingCart::new();
        assert!(cart.payment_method_name().is_none());
        assert!(matches!(
            cart.checkout(500),
            Err(PatternError::NoPaymentMethod { amount: 500 })
        ));
    }

    #[test]
    fn test_switching_strategies() {
        let mut cart = ShoppingCart::new();

        cart.set_payment_method(Box::new(PaypalPayment));
        assert_eq!(cart.payment_method_name(), Some("PayPal"));
        assert_eq!(cart.checkout(500).unwrap(), "Paid 500 using PayPal");

        cart.set_payment_method(Box::new(CreditCardPayment));
        assert_eq!(cart.payment_method_name(), Some("Credit Card"));
        assert_eq!(cart.checkout(1000).unwrap(), "Paid 1000 using Credit Card");
    }
}
