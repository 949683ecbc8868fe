use anyhow::{Context, Result};
use keyring::Entry;

const SERVICE_NAME: &str = "manatee-trello";

/// Keychain slot for the user token Trello issued to one application key.
///
/// Tokens are only valid together with the key that requested them, so the
/// key names the slot and switching keys never picks up a foreign token.
pub struct TokenStore {
    app_key: String,
    entry: Entry,
}

impl TokenStore {
    pub fn for_app_key(app_key: &str) -> Result<Self> {
        let entry = Entry::new(SERVICE_NAME, app_key)
            .with_context(|| format!("Failed to open keychain slot for app key {}", app_key))?;
        Ok(Self {
            app_key: app_key.to_string(),
            entry,
        })
    }

    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    pub fn save(&self, token: &str) -> Result<()> {
        self.entry
            .set_password(token)
            .context("Failed to store token in keychain")
    }

    /// The stored token, or `None` when this key was never authorized.
    pub fn load(&self) -> Result<Option<String>> {
        match self.entry.get_password() {
            Ok(token) => Ok(Some(token)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e).context("Failed to read token from keychain"),
        }
    }

    /// Remove the token. Returns `false` when there was none.
    pub fn forget(&self) -> Result<bool> {
        match self.entry.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_lifecycle_in_mock_keychain() {
        keyring::set_default_credential_builder(keyring::mock::default_credential_builder());

        let store = TokenStore::for_app_key("test-app-key").unwrap();
        assert_eq!(store.app_key(), "test-app-key");
        assert_eq!(store.load().unwrap(), None);
        assert!(!store.forget().unwrap());

        store.save("user-token").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("user-token"));

        assert!(store.forget().unwrap());
        assert_eq!(store.load().unwrap(), None);
    }
}
