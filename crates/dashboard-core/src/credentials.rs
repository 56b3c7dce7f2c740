//! Username/password entry state.

/// Which input box receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Username,
    Password,
}

impl Field {
    pub fn toggled(self) -> Self {
        match self {
            Field::Username => Field::Password,
            Field::Password => Field::Username,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub focus: Field,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            focus: Field::Username,
        }
    }

    /// One `*` per password character.
    pub fn masked_password(&self) -> String {
        "*".repeat(self.password.chars().count())
    }
}

/// Characters the input boxes accept: printable ASCII, space included.
pub fn is_accepted_char(c: char) -> bool {
    matches!(c, ' '..='~')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_toggles() {
        assert_eq!(Field::Username.toggled(), Field::Password);
        assert_eq!(Field::Password.toggled(), Field::Username);
    }

    #[test]
    fn mask_matches_length() {
        let creds = Credentials::new("neo", "hunter2");
        assert_eq!(creds.masked_password(), "*******");
        assert_eq!(Credentials::default().masked_password(), "");
    }

    #[test]
    fn accepted_range_is_printable_ascii() {
        assert!(is_accepted_char(' '));
        assert!(is_accepted_char('~'));
        assert!(is_accepted_char('a'));
        assert!(!is_accepted_char('\t'));
        assert!(!is_accepted_char('\n'));
        assert!(!is_accepted_char('\u{7f}'));
        assert!(!is_accepted_char('é'));
    }
}
