use std::sync::Arc;

use argon2::{Argon2, password_hash::{PasswordHasher, PasswordVerifier, SaltString}, PasswordHash};
use models::RoleName;
use rand::rngs::OsRng;
use tracing::{debug, info, instrument};

use super::domain::{AuthSession, LoginRequest, NewUser, Principal, RegisterRequest, UserDto};
use super::errors::AuthError;
use super::repository::AuthRepository;
use super::token;
use crate::validation::Validate;

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository + ?Sized> {
    repo: Arc<R>,
    cfg: AuthConfig,
}

fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::HashError(e.to_string()))?
        .to_string())
}

impl<R: AuthRepository + ?Sized> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Self { Self { repo, cfg } }

    /// Register a new account holding `ROLE_USER`.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::memory::InMemoryAuthRepository};
    /// use service::auth::domain::RegisterRequest;
    /// use std::sync::Arc;
    /// let repo = Arc::new(InMemoryAuthRepository::default());
    /// let svc = AuthService::new(repo, AuthConfig { jwt_secret: "0123456789abcdef".into(), token_ttl_hours: 1 });
    /// let input = RegisterRequest {
    ///     email: "user@example.com".into(), password: "Secret123".into(), repeat_password: "Secret123".into(),
    ///     first_name: "Test".into(), last_name: "User".into(), shipping_address: None,
    /// };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "user@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterRequest) -> Result<UserDto, AuthError> {
        input.validate()?;
        let email = input.email.trim().to_string();
        if let Some(existing) = self.repo.find_user_by_email(&email).await? {
            debug!("user exists: {}", existing.email);
            return Err(AuthError::Conflict);
        }
        let user = self
            .repo
            .create_user(NewUser {
                email,
                password_hash: hash_password(&input.password)?,
                first_name: input.first_name,
                last_name: input.last_name,
                shipping_address: input.shipping_address,
                roles: vec![RoleName::User],
            })
            .await?;
        info!(user_id = user.id, email = %user.email, "user_registered");
        Ok(user.into())
    }

    /// Authenticate a user and issue a token.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::memory::InMemoryAuthRepository};
    /// use service::auth::domain::{RegisterRequest, LoginRequest};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(
    ///     Arc::new(InMemoryAuthRepository::default()),
    ///     AuthConfig { jwt_secret: "0123456789abcdef".into(), token_ttl_hours: 1 },
    /// );
    /// let _ = tokio_test::block_on(svc.register(RegisterRequest {
    ///     email: "u@e.com".into(), password: "Passw0rd".into(), repeat_password: "Passw0rd".into(),
    ///     first_name: "N".into(), last_name: "M".into(), shipping_address: None,
    /// }));
    /// let session = tokio_test::block_on(svc.login(LoginRequest { email: "u@e.com".into(), password: "Passw0rd".into() })).unwrap();
    /// assert_eq!(session.user.email, "u@e.com");
    /// assert!(!session.token.is_empty());
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginRequest) -> Result<AuthSession, AuthError> {
        let user = self
            .repo
            .find_user_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::Unauthorized)?;

        let parsed = PasswordHash::new(&user.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err() {
            return Err(AuthError::Unauthorized);
        }

        let principal = Principal { user_id: user.id, email: user.email.clone(), roles: user.roles.clone() };
        let token = token::issue_token(&principal, &self.cfg.jwt_secret, self.cfg.token_ttl_hours)?;
        info!(user_id = user.id, "user_logged_in");
        Ok(AuthSession { user: user.into(), token })
    }

    #[instrument(skip(self))]
    pub async fn grant_role(&self, user_id: i64, role: RoleName) -> Result<(), AuthError> {
        self.repo.grant_role(user_id, role).await?;
        info!(user_id, role = %role, "role_granted");
        Ok(())
    }

    /// Make sure an administrator account exists for `email`. An existing
    /// account keeps its password and gains `ROLE_ADMIN`.
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(&self, email: &str, password: &str) -> Result<(), AuthError> {
        if let Some(existing) = self.repo.find_user_by_email(email).await? {
            if !existing.roles.contains(&RoleName::Admin) {
                self.grant_role(existing.id, RoleName::Admin).await?;
            }
            return Ok(());
        }
        let user = self
            .repo
            .create_user(NewUser {
                email: email.to_string(),
                password_hash: hash_password(password)?,
                first_name: "Admin".into(),
                last_name: "Admin".into(),
                shipping_address: None,
                roles: RoleName::ALL.to_vec(),
            })
            .await?;
        info!(user_id = user.id, email = %user.email, "admin_bootstrapped");
        Ok(())
    }

    /// Resolve a bearer token into the calling principal.
    pub fn authenticate(&self, bearer: &str) -> Result<Principal, AuthError> {
        token::decode_token(bearer, &self.cfg.jwt_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::RegisterRequest;
    use crate::auth::repository::memory::InMemoryAuthRepository;

    fn svc() -> AuthService<InMemoryAuthRepository> {
        AuthService::new(
            Arc::new(InMemoryAuthRepository::default()),
            AuthConfig { jwt_secret: "0123456789abcdef0123".into(), token_ttl_hours: 1 },
        )
    }

    fn reader() -> RegisterRequest {
        RegisterRequest {
            email: "reader@example.com".into(),
            password: "Passw0rd!".into(),
            repeat_password: "Passw0rd!".into(),
            first_name: "Ada".into(),
            last_name: "Reader".into(),
            shipping_address: Some("1 Main St".into()),
        }
    }

    #[tokio::test]
    async fn register_grants_user_role_and_rejects_duplicates() {
        let svc = svc();
        let user = svc.register(reader()).await.unwrap();
        assert_eq!(user.roles, vec![RoleName::User]);
        let err = svc.register(reader()).await.unwrap_err();
        assert!(matches!(err, AuthError::Conflict));
    }

    #[tokio::test]
    async fn register_validates_input() {
        let err = svc().register(RegisterRequest { repeat_password: "other".into(), ..reader() }).await.unwrap_err();
        assert_eq!(err.code(), 1001);
    }

    #[tokio::test]
    async fn login_issues_token_for_principal() {
        let svc = svc();
        let user = svc.register(reader()).await.unwrap();
        let session = svc
            .login(LoginRequest { email: "reader@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap();
        let principal = svc.authenticate(&session.token).unwrap();
        assert_eq!(principal.user_id, user.id);
        assert!(principal.has_role(RoleName::User));
        assert!(!principal.has_role(RoleName::Admin));
    }

    #[tokio::test]
    async fn wrong_password_or_unknown_email_is_unauthorized() {
        let svc = svc();
        svc.register(reader()).await.unwrap();
        let bad = svc.login(LoginRequest { email: "reader@example.com".into(), password: "nope-nope".into() }).await;
        assert!(matches!(bad, Err(AuthError::Unauthorized)));
        let unknown = svc.login(LoginRequest { email: "ghost@example.com".into(), password: "Passw0rd!".into() }).await;
        assert!(matches!(unknown, Err(AuthError::Unauthorized)));
    }

    #[tokio::test]
    async fn ensure_admin_creates_then_promotes() {
        let svc = svc();
        svc.ensure_admin("admin@example.com", "AdminPass1").await.unwrap();
        let session = svc
            .login(LoginRequest { email: "admin@example.com".into(), password: "AdminPass1".into() })
            .await
            .unwrap();
        assert_eq!(session.user.roles, vec![RoleName::User, RoleName::Admin]);

        svc.register(reader()).await.unwrap();
        svc.ensure_admin("reader@example.com", "ignored-password").await.unwrap();
        let promoted = svc
            .login(LoginRequest { email: "reader@example.com".into(), password: "Passw0rd!".into() })
            .await
            .unwrap();
        assert!(promoted.user.roles.contains(&RoleName::Admin));
    }
}
