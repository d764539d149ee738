// Prototype: clone a record, change the clone, the original is untouched.

use anyhow::Result;
use design_patterns::creational::prototype::{clone_from_prototype, Car, Member};
use design_patterns::demo;

fn main() -> Result<()> {
    let config = demo::init()?;

    println!("{}", demo::banner("Prototype Pattern", &config));
    let original = Member::new("Alice", "alice@example.com", "Manager", "IN");
    let mut copy = clone_from_prototype(&original);
    copy.name = "Bob".to_string();
    copy.email = "bob@example.com".to_string();
    println!("{}", original);
    println!("{}", copy);

    println!();
    println!("{}", demo::banner("Cloning a Car", &config));
    let car1 = Car::new("Tesla", "white");
    let mut car2 = clone_from_prototype(&car1);
    car2.color = "black".to_string();
    println!("{}", car1.drive());
    println!("{}", car2.drive());

    Ok(())
}
