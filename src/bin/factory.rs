// Factories: simple factory, factory method and abstract factory.
//
// The simple factory is finally asked for an unsupported kind; that error
// ends the run.

use anyhow::{Context, Result};
use design_patterns::creational::factory::{
    render_ui, EmailNotificationFactory, GuiFactory, MacFactory, NotificationCreator,
    NotificationFactory, SmsNotificationFactory, WinFactory,
};
use design_patterns::demo;

fn main() -> Result<()> {
    let config = demo::init()?;

    println!("{}", demo::banner("Factory Method", &config));
    let creators: Vec<Box<dyn NotificationCreator>> = vec![
        Box::new(EmailNotificationFactory),
        Box::new(SmsNotificationFactory),
    ];
    for creator in &creators {
        println!("{}", creator.notify());
    }

    println!();
    println!("{}", demo::banner("Abstract Factory", &config));
    let factories: Vec<(&str, Box<dyn GuiFactory>)> = vec![
        ("Windows", Box::new(WinFactory) as Box<dyn GuiFactory>),
        ("Mac", Box::new(MacFactory) as Box<dyn GuiFactory>),
    ];
    for (platform, factory) in &factories {
        println!("{}: {}", platform, render_ui(factory.as_ref()).join(", "));
    }

    println!();
    println!("{}", demo::banner("Simple Factory", &config));
    for kind in ["email", "sms", "slack"] {
        let notification = NotificationFactory::create(kind)
            .with_context(|| format!("simple factory could not build '{}'", kind))?;
        println!("{}", notification.send());
    }

    Ok(())
}
