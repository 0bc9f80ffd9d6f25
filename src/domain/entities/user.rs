use std::fmt;

/// Name used in greetings when the sender has neither a username nor a name
pub const FALLBACK_NAME: &str = "User";

/// Represents the sender of a message
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: String,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub is_bot: bool,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: None,
            first_name: None,
            last_name: None,
            is_bot: false,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_name(mut self, first: impl Into<String>, last: Option<impl Into<String>>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = last.map(|l| l.into());
        self
    }

    /// Username without the leading `@`, if set and non-empty
    pub fn username(&self) -> Option<&str> {
        self.username
            .as_deref()
            .map(|u| u.trim_start_matches('@'))
            .filter(|u| !u.is_empty())
    }

    /// First and last name joined by a space, if either is set
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Name to address the user by: username, then full name, then id
    pub fn display_name(&self) -> String {
        self.username()
            .map(str::to_string)
            .or_else(|| self.full_name())
            .unwrap_or_else(|| self.id.clone())
    }
}

/// Name to greet an optional sender with: username, then full name, then [`FALLBACK_NAME`]
pub fn greeting_name(user: Option<&User>) -> String {
    user.and_then(|u| u.username().map(str::to_string).or_else(|| u.full_name()))
        .unwrap_or_else(|| FALLBACK_NAME.to_string())
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_name_prefers_username() {
        let user = User::new("1").with_username("alice").with_name("Alice", Some("Smith"));
        assert_eq!(greeting_name(Some(&user)), "alice");
    }

    #[test]
    fn test_greeting_name_falls_back_to_full_name() {
        let user = User::new("2").with_name("Bob", None::<String>);
        assert_eq!(greeting_name(Some(&user)), "Bob");

        let user = User::new("3").with_name("Bob", Some("Marley"));
        assert_eq!(greeting_name(Some(&user)), "Bob Marley");
    }

    #[test]
    fn test_greeting_name_treats_empty_as_missing() {
        let user = User::new("4").with_username("").with_name("", Some(""));
        assert_eq!(greeting_name(Some(&user)), FALLBACK_NAME);
        assert_eq!(greeting_name(None), FALLBACK_NAME);
    }

    #[test]
    fn test_display_name_uses_id_last() {
        let user = User::new("42");
        assert_eq!(user.to_string(), "42");
    }
}
