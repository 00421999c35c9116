use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, TransactionTrait,
};

use models::{role, user, user_role, RoleName};

use crate::auth::domain::{NewUser, UserRecord};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn record(u: user::Model, roles: Vec<RoleName>) -> UserRecord {
    UserRecord {
        id: u.id,
        email: u.email,
        password_hash: u.password_hash,
        first_name: u.first_name,
        last_name: u.last_name,
        shipping_address: u.shipping_address,
        roles,
    }
}

async fn link_role<C: ConnectionTrait>(db: &C, user_id: i64, role: RoleName) -> Result<(), AuthError> {
    let role_row = role::find_by_name(db, role).await.map_err(|e| AuthError::Repository(e.to_string()))?;
    if user_role::Entity::find_by_id((user_id, role_row.id)).one(db).await?.is_some() {
        return Ok(());
    }
    user_role::ActiveModel { user_id: Set(user_id), role_id: Set(role_row.id) }.insert(db).await?;
    Ok(())
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        let Some(u) = user::Entity::find().filter(user::Column::Email.eq(email)).one(&self.db).await? else {
            return Ok(None);
        };
        let roles = user::roles_of(&self.db, u.id).await.map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(Some(record(u, roles)))
    }

    async fn create_user(&self, new: NewUser) -> Result<UserRecord, AuthError> {
        let txn = self.db.begin().await?;
        let created = user::create(
            &txn,
            &new.email,
            &new.password_hash,
            &new.first_name,
            &new.last_name,
            new.shipping_address,
        )
        .await
        .map_err(|e| match e {
            models::errors::ModelError::Validation(msg) => AuthError::Validation(msg),
            other => AuthError::Repository(other.to_string()),
        })?;
        for role in &new.roles {
            link_role(&txn, created.id, *role).await?;
        }
        txn.commit().await?;
        let roles = user::roles_of(&self.db, created.id).await.map_err(|e| AuthError::Repository(e.to_string()))?;
        Ok(record(created, roles))
    }

    async fn grant_role(&self, user_id: i64, role: RoleName) -> Result<(), AuthError> {
        if user::Entity::find_by_id(user_id).one(&self.db).await?.is_none() {
            return Err(AuthError::NotFound);
        }
        link_role(&self.db, user_id, role).await
    }
}
