//! Mocked authentication.
//!
//! No identity provider is wired up; sign-in installs a mock user derived
//! from the email address. The session lives in an explicit store on
//! [`crate::state::AppState`] rather than ambient global state.

use anyhow::{bail, Result};
use pulsefeed_shared::{Role, Theme, User, UserPreferences};
use tokio::sync::RwLock;

const MOCK_AVATAR: &str = "https://images.pexels.com/photos/220453/pexels-photo-220453.jpeg";

/// Single-slot session store.
#[derive(Debug, Default)]
pub struct SessionStore {
    user: RwLock<Option<User>>,
}

impl SessionStore {
    /// Sign in and install the mock user. Any non-empty credentials are
    /// accepted.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            bail!("email and password are required");
        }

        let user = mock_user(email, display_name(email));
        *self.user.write().await = Some(user.clone());
        Ok(user)
    }

    /// Register a new account. The mock flow succeeds without installing a
    /// session; the user would confirm their email first.
    pub async fn sign_up(&self, email: &str, password: &str, name: &str) -> Result<User> {
        let email = email.trim();
        let name = name.trim();
        if email.is_empty() || password.is_empty() || name.is_empty() {
            bail!("email, password and name are required");
        }
        Ok(mock_user(email, name.to_string()))
    }

    pub async fn sign_out(&self) {
        *self.user.write().await = None;
    }

    /// The signed-in user, if any.
    pub async fn current(&self) -> Option<User> {
        self.user.read().await.clone()
    }
}

fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

fn mock_user(email: &str, name: String) -> User {
    User {
        id: "1".to_string(),
        name,
        email: email.to_string(),
        avatar: MOCK_AVATAR.to_string(),
        role: Role::User,
        preferences: UserPreferences {
            categories: Vec::new(),
            notifications: true,
            theme: Theme::Dark,
        },
    }
}
