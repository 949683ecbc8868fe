use std::fmt;

/// Environment variable holding the application key
pub const APP_KEY_ENV: &str = "TRELLO_APP_KEY";

/// Environment variable holding the user token
pub const USER_TOKEN_ENV: &str = "TRELLO_USER_TOKEN";

/// Application key and (optional) user token.
///
/// Without a user token only public boards and members can be read.
#[derive(Clone, Default)]
pub struct Authorization {
    app_key: String,
    user_token: Option<String>,
}

impl Authorization {
    pub fn new(app_key: impl Into<String>, user_token: Option<String>) -> Self {
        Self {
            app_key: app_key.into(),
            user_token: user_token.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Build from `TRELLO_APP_KEY` / `TRELLO_USER_TOKEN`, if the key is set.
    pub fn from_env() -> Option<Self> {
        let app_key = std::env::var(APP_KEY_ENV).ok().filter(|k| !k.trim().is_empty())?;
        Some(Self::new(app_key, std::env::var(USER_TOKEN_ENV).ok()))
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn user_token(&self) -> Option<&str> {
        self.user_token.as_deref()
    }

    pub fn set_user_token(&mut self, token: Option<String>) {
        self.user_token = token.filter(|t| !t.trim().is_empty());
    }

    pub fn has_app_key(&self) -> bool {
        !self.app_key.trim().is_empty()
    }

    /// Query parameters attached to every request
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("key", self.app_key.as_str())];
        if let Some(ref token) = self.user_token {
            pairs.push(("token", token.as_str()));
        }
        pairs
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("app_key", &self.app_key)
            .field("user_token", &self.user_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_with_token() {
        let auth = Authorization::new("key123", Some("tok456".to_string()));
        assert_eq!(auth.query_pairs(), vec![("key", "key123"), ("token", "tok456")]);
    }

    #[test]
    fn test_blank_token_is_dropped() {
        let auth = Authorization::new("key123", Some("   ".to_string()));
        assert_eq!(auth.user_token(), None);
        assert_eq!(auth.query_pairs(), vec![("key", "key123")]);
    }

    #[test]
    fn test_debug_redacts_token() {
        let auth = Authorization::new("key123", Some("secret-token".to_string()));
        let rendered = format!("{:?}", auth);
        assert!(rendered.contains("key123"));
        assert!(!rendered.contains("secret-token"));
    }
}
