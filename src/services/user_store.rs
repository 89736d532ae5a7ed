use std::sync::{Arc, Mutex, MutexGuard};

use chrono::Utc;
use thiserror::Error;

use crate::models::user::{UserAccount, UserProfile};

pub const MIN_PASSWORD_LEN: usize = 6;
const HIDDEN_PASSWORD: &str = "***hidden***";

pub const DEMO_USER_EMAIL: &str = "demo@voyagemate.app";
pub const DEMO_USER_PASSWORD: &str = "voyage123";

#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User not found")]
    NotFound,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Current password is incorrect")]
    IncorrectPassword,
    #[error("New password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Process-lifetime user list. Nothing is persisted.
#[derive(Clone)]
pub struct UserStore {
    users: Arc<Mutex<Vec<UserAccount>>>,
    hash_cost: u32,
}

impl UserStore {
    pub fn new(hash_cost: u32) -> Self {
        Self {
            users: Arc::new(Mutex::new(Vec::new())),
            hash_cost,
        }
    }

    /// Store seeded with the single demo account the client ships with.
    pub fn with_demo_user(hash_cost: u32) -> Result<Self, UserStoreError> {
        let store = Self::new(hash_cost);
        store.insert(
            "user1",
            "firebase-uid-1",
            "Demo Traveler",
            DEMO_USER_EMAIL,
            DEMO_USER_PASSWORD,
        )?;
        Ok(store)
    }

    pub fn insert(
        &self,
        id: &str,
        uid: &str,
        display_name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, UserStoreError> {
        let account = UserAccount {
            id: id.to_string(),
            uid: uid.to_string(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            password_hash: bcrypt::hash(password, self.hash_cost)?,
            photo_url: None,
            access_token: Some(format!("mock-token-{}", id)),
            updated_at: None,
        };
        let profile = UserProfile::from(&account);
        self.lock().push(account);
        Ok(profile)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UserAccount>> {
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn profile(&self, user_id: &str) -> Result<UserProfile, UserStoreError> {
        self.lock()
            .iter()
            .find(|u| u.matches(user_id))
            .map(UserProfile::from)
            .ok_or(UserStoreError::NotFound)
    }

    /// Applies a new display name and/or email. Blank values are ignored.
    pub fn update_profile(
        &self,
        user_id: &str,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<UserProfile, UserStoreError> {
        let mut users = self.lock();
        let index = users
            .iter()
            .position(|u| u.matches(user_id))
            .ok_or(UserStoreError::NotFound)?;

        let email = email.filter(|e| !e.is_empty());
        if let Some(email) = email {
            let taken = users
                .iter()
                .enumerate()
                .any(|(i, u)| i != index && u.email == email);
            if taken {
                return Err(UserStoreError::EmailTaken);
            }
        }

        let user = &mut users[index];
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            user.display_name = name.to_string();
        }
        if let Some(email) = email {
            user.email = email.to_string();
        }
        user.updated_at = Some(Utc::now());

        log::info!("Profile updated for user {}", user_id);
        Ok(UserProfile::from(&*user))
    }

    /// Hashing runs without the lock held. The new hash is only written if the
    /// stored hash is still the one that was verified.
    pub fn update_password(
        &self,
        user_id: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), UserStoreError> {
        let (account_id, verified_hash) = {
            let users = self.lock();
            let user = users
                .iter()
                .find(|u| u.matches(user_id))
                .ok_or(UserStoreError::NotFound)?;
            (user.id.clone(), user.password_hash.clone())
        };

        if !bcrypt::verify(current_password, &verified_hash).unwrap_or(false) {
            return Err(UserStoreError::IncorrectPassword);
        }
        if new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(UserStoreError::PasswordTooShort);
        }
        let new_hash = bcrypt::hash(new_password, self.hash_cost)?;

        let mut users = self.lock();
        let user = users
            .iter_mut()
            .find(|u| u.id == account_id)
            .ok_or(UserStoreError::NotFound)?;
        if user.password_hash != verified_hash {
            return Err(UserStoreError::IncorrectPassword);
        }
        user.password_hash = new_hash;
        user.updated_at = Some(Utc::now());

        log::info!("Password updated for user {}", user_id);
        Ok(())
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<UserProfile, UserStoreError> {
        let account = self
            .lock()
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(UserStoreError::InvalidCredentials)?;

        if bcrypt::verify(password, &account.password_hash).unwrap_or(false) {
            Ok(UserProfile::from(&account))
        } else {
            Err(UserStoreError::InvalidCredentials)
        }
    }

    /// Every user with the password field masked, for local debugging.
    pub fn list_masked(&self) -> Vec<UserProfile> {
        self.lock()
            .iter()
            .map(|u| UserProfile {
                password: Some(HIDDEN_PASSWORD.to_string()),
                ..UserProfile::from(u)
            })
            .collect()
    }
}
