// Factory Patterns - Simple Factory, Factory Method, Abstract Factory

use crate::error::PatternError;
use std::str::FromStr;

// ============================================================================
// Product interface
// ============================================================================

pub trait Notification {
    fn send(&self) -> String;
}

pub struct EmailNotification;
impl Notification for EmailNotification {
    fn send(&self) -> String {
        "Sending Email Notification".to_string()
    }
}

pub struct SmsNotification;
impl Notification for SmsNotification {
    fn send(&self) -> String {
        "Sending SMS Notification".to_string()
    }
}

// ============================================================================
// Simple Factory
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Email,
    Sms,
}

impl FromStr for NotificationKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            other => Err(PatternError::unknown_notification(other)),
        }
    }
}

pub struct NotificationFactory;

impl NotificationFactory {
    pub fn create(kind: &str) -> crate::error::Result<Box<dyn Notification>> {
        let kind: NotificationKind = kind.parse()?;
        tracing::debug!(?kind, "simple factory: creating notification");
        Ok(Self::create_kind(kind))
    }

    pub fn create_kind(kind: NotificationKind) -> Box<dyn Notification> {
        match kind {
            NotificationKind::Email => Box::new(EmailNotification),
            NotificationKind::Sms => Box::new(SmsNotification),
        }
    }
}

// ============================================================================
// Factory Method
// ============================================================================

/// Subtypes choose the product; `notify` is shared.
pub trait NotificationCreator {
    fn create_notification(&self) -> Box<dyn Notification>;

    fn notify(&self) -> String {
        self.create_notification().send()
    }
}

pub struct EmailNotificationFactory;
impl NotificationCreator for EmailNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(EmailNotification)
    }
}

pub struct SmsNotificationFactory;
impl NotificationCreator for SmsNotificationFactory {
    fn create_notification(&self) -> Box<dyn Notification> {
        Box::new(SmsNotification)
    }
}

// ============================================================================
// Abstract Factory
// ============================================================================

pub trait Button {
    fn render(&self) -> String;
}

pub trait Checkbox {
    fn check(&self) -> String;
}

pub struct WinButton;
impl Button for WinButton {
    fn render(&self) -> String {
        "Windows Button".to_string()
    }
}

pub struct MacButton;
impl Button for MacButton {
    fn render(&self) -> String {
        "Mac Button".to_string()
    }
}

pub struct WinCheckbox;
impl Checkbox for WinCheckbox {
    fn check(&self) -> String {
        "Windows Checkbox".to_string()
    }
}

pub struct MacCheckbox;
impl Checkbox for MacCheckbox {
    fn check(&self) -> String {
        "Mac Checkbox".to_string()
    }
}

/// Creates one family of widgets that belong together.
pub trait GuiFactory {
    fn create_button(&self) -> Box<dyn Button>;
    fn create_checkbox(&self) -> Box<dyn Checkbox>;
}

pub struct WinFactory;
impl GuiFactory for WinFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(WinButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(WinCheckbox)
    }
}

pub struct MacFactory;
impl GuiFactory for MacFactory {
    fn create_button(&self) -> Box<dyn Button> {
        Box::new(MacButton)
    }

    fn create_checkbox(&self) -> Box<dyn Checkbox> {
        Box::new(MacCheckbox)
    }
}

pub fn render_ui(factory: &dyn GuiFactory) -> Vec<String> {
    let button = factory.create_button();
    let checkbox = factory.create_checkbox();
    vec![button.render(), checkbox.check()]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_factory_known_kinds() {
        let email = NotificationFactory::create("email").unwrap();
        let sms = NotificationFactory::create("sms").unwrap();
        assert_eq!(email.send(), "Sending Email Notification");
        assert_eq!(sms.send(), "Sending SMS Notification");
    }

    #[test]
    fn test_simple_factory_unknown_kind() {
        let result = NotificationFactory::create("slack");
        assert!(matches!(
            result,
            Err(PatternError::UnknownNotification { ref kind }) if kind == "slack"
        ));
    }

    #[test]
    fn test_kind_parsing_is_exact() {
        assert_eq!("email".parse::<NotificationKind>().unwrap(), NotificationKind::Email);
        assert!("Email".parse::<NotificationKind>().is_err());
        assert!("".parse::<NotificationKind>().is_err());
    }

    #[test]
    fn test_factory_method() {
        let creators: Vec<Box<dyn NotificationCreator>> = vec![
            Box::new(EmailNotificationFactory),
            Box::new(SmsNotificationFactory),
        ];
        let sent: Vec<String> = creators.iter().map(|c| c.notify()).collect();
        assert_eq!(
            sent,
            vec!["Sending Email Notification", "Sending SMS Notification"]
        );
    }

    #[test]
    fn test_abstract_factory_families() {
        assert_eq!(render_ui(&WinFactory), vec!["Windows Button", "Windows Checkbox"]);
        assert_eq!(render_ui(&MacFactory), vec!["Mac Button", "Mac Checkbox"]);
    }
}
