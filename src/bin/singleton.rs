// Singleton: two requests for the instance yield the same object, and the
// creation side effect runs once.

use anyhow::Result;
use design_patterns::creational::singleton::Singleton;
use design_patterns::demo;

fn main() -> Result<()> {
    let config = demo::init()?;
    println!("{}", demo::banner("Singleton Pattern", &config));

    let s1 = Singleton::instance();
    let s2 = Singleton::instance();
    println!("Same instance: {}", std::ptr::eq(s1, s2));
    println!("{}", s1.log());
    println!("{}", s2.log());
    println!("{}", s1.business_logic());
    println!("Initializations: {}", Singleton::registry().init_count());
    println!("Serialized: {}", serde_json::to_string(s1)?);

    println!();
    println!("{}", demo::banner("Duplicating Through Deserialization", &config));
    match serde_json::from_str::<Singleton>(r#"{"created_at":0}"#) {
        Ok(_) => println!("Unexpectedly created a second instance"),
        Err(err) => println!("Refused: {}", err),
    }

    Ok(())
}
