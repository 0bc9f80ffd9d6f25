//! Command handlers - The fixed `/start` and `/support` replies

use crate::application::errors::CommandError;
use crate::application::messaging::CommandRouter;
use crate::domain::entities::{greeting_name, Command, KeyboardButton, Message, Reply};

pub const APP_BUTTON_LABEL: &str = "ॲप उघडा";
pub const APP_URL: &str = "http://t.me/mahaai_bot/MAHAAIQUIZ";

pub const SUPPORT_TEXT: &str = "❓आपणास प्रश्नसंच बाबतीत काही त्रुटी किंवा मदत किंवा नवीन ऑफर जाणून घ्यायची असेल तर आमच्याशी संपर्क साधा.";
pub const SUPPORT_BUTTON_LABEL: &str = "संपर्क";
pub const SUPPORT_URL: &str = "https://t.me/mrcoolxaj";

/// Greeting sent on `/start`, addressed to `@{name}`
pub fn welcome_text(name: &str) -> String {
    format!(
        "महा AI मध्ये आपले स्वागत आहे.\n\n@{}, खालील बटन वर क्लिक करून कृपया प्रश्नसंच सोडवा",
        name
    )
}

/// `/start`: greet the sender and link to the quiz app
pub fn start(message: &Message) -> Reply {
    let name = greeting_name(message.sender.as_ref());
    Reply::text(welcome_text(&name)).with_button(KeyboardButton::url(APP_BUTTON_LABEL, APP_URL))
}

/// `/support`: fixed help text with a contact link
pub fn support(_message: &Message) -> Reply {
    Reply::text(SUPPORT_TEXT).with_button(KeyboardButton::url(SUPPORT_BUTTON_LABEL, SUPPORT_URL))
}

/// Router with `/start` and `/support` registered
pub fn default_router() -> Result<CommandRouter, CommandError> {
    let mut router = CommandRouter::new();
    router.register_command(Command::new("start", start).with_description("Open the MahaAI quiz"))?;
    router.register_command(Command::new("support", support).with_description("Contact support"))?;
    Ok(router)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::User;

    fn message_from(user: Option<User>) -> Message {
        Message::from_text("100", "/start").with_sender_opt(user)
    }

    #[test]
    fn test_start_uses_username() {
        let reply = start(&message_from(Some(User::new("1").with_username("alice").with_name("Alice", None::<String>))));
        assert!(reply.text.contains("@alice"));
        assert!(!reply.text.contains("Alice"));
        assert_eq!(reply.keyboard, vec![vec![KeyboardButton::url(APP_BUTTON_LABEL, APP_URL)]]);
    }

    #[test]
    fn test_start_falls_back_to_display_name() {
        let reply = start(&message_from(Some(User::new("2").with_name("Bob", None::<String>))));
        assert!(reply.text.contains("Bob"));
        assert_eq!(reply.text, welcome_text("Bob"));
    }

    #[test]
    fn test_start_falls_back_to_user_literal() {
        assert_eq!(start(&message_from(Some(User::new("3")))).text, welcome_text("User"));
        assert_eq!(start(&message_from(None)).text, welcome_text("User"));
    }

    #[test]
    fn test_support_is_fixed() {
        let anon = support(&message_from(None));
        let alice = support(&message_from(Some(User::new("1").with_username("alice"))));

        assert_eq!(anon, alice);
        assert_eq!(anon.text, SUPPORT_TEXT);
        assert_eq!(anon.keyboard.len(), 1);
        assert_eq!(anon.keyboard[0], vec![KeyboardButton::url(SUPPORT_BUTTON_LABEL, SUPPORT_URL)]);
    }

    #[test]
    fn test_default_router_has_both_commands() {
        let router = default_router().unwrap();
        assert_eq!(router.len(), 2);
        assert!(router.contains("start"));
        assert!(router.contains("support"));
        assert!(router.commands().iter().all(|c| c.description.is_some()));
    }
}
