// Builder: chained setters on a mutable builder, then build().

use anyhow::Result;
use design_patterns::creational::builder::{UserBuilder, UserBuilderInterface};
use design_patterns::demo;

fn main() -> Result<()> {
    let config = demo::init()?;

    println!("{}", demo::banner("Builder Pattern (all fields)", &config));
    let mut builder = UserBuilder::new();
    let user = builder
        .name("John Doe")
        .email("john@example.com")
        .age(30)
        .address("123 Main St")
        .build();
    println!("{}", user.display_with(&config.placeholder));

    println!();
    println!("{}", demo::banner("Builder Pattern (partial)", &config));
    let mut builder = UserBuilder::new();
    let user = builder.name("Alice").email("alice@example.com").build();
    println!("{}", user.display_with(&config.placeholder));

    println!();
    println!("{}", demo::banner("Reusing the Builder", &config));
    builder.age(28);
    println!("{}", builder.build().display_with(&config.placeholder));

    let finished = builder.into_user();
    tracing::info!(user = ?finished, "builder finalized");

    Ok(())
}
