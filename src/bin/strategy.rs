// Strategy: the cart switches payment method between checkouts.

use anyhow::Result;
use design_patterns::behavioral::strategy::{CreditCardPayment, PaypalPayment, ShoppingCart};
use design_patterns::demo;

fn main() -> Result<()> {
    let config = demo::init()?;
    println!("{}", demo::banner("Strategy Pattern", &config));

    let mut cart = ShoppingCart::new();

    // User selects PayPal
    cart.set_payment_method(Box::new(PaypalPayment));
    println!("{}", cart.checkout(500)?);

    // User switches to Credit Card
    cart.set_payment_method(Box::new(CreditCardPayment));
    println!("{}", cart.checkout(1000)?);

    Ok(())
}
