use async_trait::async_trait;
use models::RoleName;

use super::domain::{NewUser, UserRecord};
use super::errors::AuthError;

/// Repository abstraction for account persistence.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError>;
    /// `Conflict` when the email is taken.
    async fn create_user(&self, user: NewUser) -> Result<UserRecord, AuthError>;
    /// Idempotent; `NotFound` when the user does not exist.
    async fn grant_role(&self, user_id: i64, role: RoleName) -> Result<(), AuthError>;
}

/// In-memory repository for tests, benches and database-less runs
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicI64, Ordering};
    use tokio::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryAuthRepository {
        users: Mutex<HashMap<String, UserRecord>>, // key: email
        next_id: AtomicI64,
    }

    #[async_trait]
    impl AuthRepository for InMemoryAuthRepository {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
            Ok(self.users.lock().await.get(email).cloned())
        }

        async fn create_user(&self, user: NewUser) -> Result<UserRecord, AuthError> {
            let mut users = self.users.lock().await;
            if users.contains_key(&user.email) {
                return Err(AuthError::Conflict);
            }
            let mut roles = user.roles;
            roles.sort();
            roles.dedup();
            let record = UserRecord {
                id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
                email: user.email,
                password_hash: user.password_hash,
                first_name: user.first_name,
                last_name: user.last_name,
                shipping_address: user.shipping_address,
                roles,
            };
            users.insert(record.email.clone(), record.clone());
            Ok(record)
        }

        async fn grant_role(&self, user_id: i64, role: RoleName) -> Result<(), AuthError> {
            let mut users = self.users.lock().await;
            let user = users.values_mut().find(|u| u.id == user_id).ok_or(AuthError::NotFound)?;
            if !user.roles.contains(&role) {
                user.roles.push(role);
                user.roles.sort();
            }
            Ok(())
        }
    }
}
