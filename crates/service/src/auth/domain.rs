use models::RoleName;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use crate::validation::{require_non_blank, Validate};

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub shipping_address: Option<String>,
}

impl Validate for RegisterRequest {
    fn validate(&self) -> Result<(), ServiceError> {
        models::user::validate_email(&self.email)?;
        if self.password.len() < MIN_PASSWORD_LEN {
            return Err(ServiceError::validation(format!("password too short (>={MIN_PASSWORD_LEN})")));
        }
        if self.password != self.repeat_password {
            return Err(ServiceError::validation("passwords do not match"));
        }
        require_non_blank("first_name", &self.first_name)?;
        require_non_blank("last_name", &self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public view of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Option<String>,
    pub roles: Vec<RoleName>,
}

/// Stored account including its password hash; never leaves the service.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Option<String>,
    pub roles: Vec<RoleName>,
}

impl From<UserRecord> for UserDto {
    fn from(u: UserRecord) -> Self {
        Self {
            id: u.id,
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            shipping_address: u.shipping_address,
            roles: u.roles,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub shipping_address: Option<String>,
    pub roles: Vec<RoleName>,
}

/// Login result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: UserDto,
    pub token: String,
}

/// Authenticated caller as recovered from a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: i64,
    pub email: String,
    pub roles: Vec<RoleName>,
}

impl Principal {
    pub fn has_role(&self, role: RoleName) -> bool { self.roles.contains(&role) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            email: "reader@example.com".into(),
            password: "Passw0rd!".into(),
            repeat_password: "Passw0rd!".into(),
            first_name: "Ada".into(),
            last_name: "Reader".into(),
            shipping_address: None,
        }
    }

    #[test]
    fn registration_checks() {
        assert!(request().validate().is_ok());
        assert!(RegisterRequest { email: "nope".into(), ..request() }.validate().is_err());
        assert!(RegisterRequest { password: "short".into(), repeat_password: "short".into(), ..request() }
            .validate()
            .is_err());
        let err = RegisterRequest { repeat_password: "Passw0rd?".into(), ..request() }.validate().unwrap_err();
        assert_eq!(err.to_string(), "validation error: passwords do not match");
        assert!(RegisterRequest { last_name: " ".into(), ..request() }.validate().is_err());
    }

    #[test]
    fn has_role_checks_membership() {
        let p = Principal { user_id: 1, email: "a@b.c".into(), roles: vec![RoleName::User] };
        assert!(p.has_role(RoleName::User));
        assert!(!p.has_role(RoleName::Admin));
    }
}
